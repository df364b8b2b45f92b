use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::facet::{FacetFilterEngine, FilterState};
use crate::layout::{Position3D, SpatialLayout};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Emphasis {
    Neutral,
    Gathered,
    Dimmed,
}

impl Emphasis {
    pub fn scale(self) -> f32 {
        match self {
            Self::Neutral => 1.0,
            Self::Gathered => 2.0,
            Self::Dimmed => 0.5,
        }
    }

    pub fn opacity(self) -> f32 {
        match self {
            Self::Neutral | Self::Gathered => 1.0,
            Self::Dimmed => 0.8,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClusterTarget {
    pub id: String,
    pub target_position: Position3D,
    pub is_gathered: bool,
    pub dispersed: Position3D,
    pub gathered: Option<Position3D>,
    /// Index into the sphere lattice when gathered.
    pub slot: Option<usize>,
    pub emphasis: Emphasis,
}

impl ClusterTarget {
    fn new(
        id: String,
        dispersed: Position3D,
        gathered: Option<Position3D>,
        slot: Option<usize>,
        emphasis: Emphasis,
    ) -> Self {
        Self {
            id,
            target_position: gathered.unwrap_or(dispersed),
            is_gathered: gathered.is_some(),
            dispersed,
            gathered,
            slot,
            emphasis,
        }
    }

    pub fn is_gathered(&self) -> bool {
        self.is_gathered
    }

    pub fn target(&self) -> Position3D {
        self.target_position
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TargetMapping {
    entries: Vec<ClusterTarget>,
    #[serde(skip)]
    index_by_id: HashMap<String, usize>,
    gathered_count: usize,
    cluster_radius: Option<f64>,
    filter_active: bool,
    revision: u64,
}

impl TargetMapping {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ClusterTarget] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClusterTarget> {
        self.entries.iter()
    }

    pub fn get(&self, id: &str) -> Option<&ClusterTarget> {
        self.index_by_id.get(id).map(|&index| &self.entries[index])
    }

    pub fn gathered_count(&self) -> usize {
        self.gathered_count
    }

    pub fn gathered_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(|entry| entry.is_gathered())
            .map(|entry| entry.id.as_str())
    }

    /// Radius of the cluster shell, `None` when nothing is gathered.
    pub fn cluster_radius(&self) -> Option<f64> {
        self.cluster_radius
    }

    pub fn filter_active(&self) -> bool {
        self.filter_active
    }

    /// Zero until published; strictly increasing per controller afterwards.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[derive(Debug)]
pub struct ClusterStateController {
    layout: SpatialLayout,
    published: Arc<TargetMapping>,
    revision: u64,
}

impl ClusterStateController {
    pub fn new(layout: SpatialLayout) -> Self {
        Self {
            layout,
            published: Arc::new(TargetMapping::default()),
            revision: 0,
        }
    }

    pub fn layout(&self) -> &SpatialLayout {
        &self.layout
    }

    pub fn recompute(&self, catalog: &Catalog, state: &FilterState) -> TargetMapping {
        let filter_active = state.has_active();

        let mut slot_by_id = HashMap::new();
        let mut slots = Vec::new();
        if filter_active {
            let matched = FacetFilterEngine::filtered_set(catalog, state);
            slots = self.layout.gathered_positions(matched.len());
            slot_by_id.reserve(matched.len());
            for (slot, artifact) in matched.into_iter().enumerate() {
                slot_by_id.insert(artifact.id.as_str(), slot);
            }
        }

        let mut entries = Vec::with_capacity(catalog.len());
        let mut index_by_id = HashMap::with_capacity(catalog.len());
        for (index, artifact) in catalog.iter().enumerate() {
            let slot = slot_by_id.get(artifact.id.as_str()).copied();
            let gathered = slot.and_then(|slot| slots.get(slot).copied());
            let emphasis = match (filter_active, gathered.is_some()) {
                (false, _) => Emphasis::Neutral,
                (true, true) => Emphasis::Gathered,
                (true, false) => Emphasis::Dimmed,
            };

            entries.push(ClusterTarget::new(
                artifact.id.clone(),
                self.layout.dispersed_position(&artifact.id),
                gathered,
                slot,
                emphasis,
            ));
            index_by_id.insert(artifact.id.clone(), index);
        }

        let gathered_count = slots.len();
        TargetMapping {
            entries,
            index_by_id,
            gathered_count,
            cluster_radius: (gathered_count > 0)
                .then(|| self.layout.cluster_radius(gathered_count)),
            filter_active,
            revision: 0,
        }
    }

    pub fn publish(&mut self, mut mapping: TargetMapping) -> Arc<TargetMapping> {
        self.revision += 1;
        mapping.revision = self.revision;
        self.published = Arc::new(mapping);
        Arc::clone(&self.published)
    }

    pub fn refresh(&mut self, catalog: &Catalog, state: &FilterState) -> Arc<TargetMapping> {
        let mapping = self.recompute(catalog, state);
        log::debug!(
            "recomputed cluster: {} of {} artifacts gathered ({} active facets)",
            mapping.gathered_count(),
            mapping.len(),
            state.active_count()
        );
        self.publish(mapping)
    }

    pub fn snapshot(&self) -> Arc<TargetMapping> {
        Arc::clone(&self.published)
    }
}
