use std::sync::Arc;

use crate::catalog::{Artifact, Catalog};
use crate::cluster::{ClusterStateController, TargetMapping};
use crate::facet::{FacetError, FacetFilterEngine, FacetKey, FilterState};
use crate::layout::SpatialLayout;
use crate::wizard::{Advance, WizardOptions, WizardProgression, WizardView};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExplorerSummary {
    pub total: usize,
    pub matching: usize,
    pub gathered: usize,
    pub active_facets: usize,
    pub progress: f32,
}

/// Every mutating call republishes the target mapping before it returns.
#[derive(Debug)]
pub struct Explorer {
    catalog: Arc<Catalog>,
    engine: FacetFilterEngine,
    wizard: WizardProgression,
    controller: ClusterStateController,
    targets: Arc<TargetMapping>,
}

impl Explorer {
    pub fn new(catalog: Arc<Catalog>, layout: SpatialLayout, options: WizardOptions) -> Self {
        let mut controller = ClusterStateController::new(layout);
        let engine = FacetFilterEngine::new();
        let targets = controller.refresh(&catalog, engine.state());

        Self {
            catalog,
            engine,
            wizard: WizardProgression::new(options),
            controller,
            targets,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn layout(&self) -> &SpatialLayout {
        self.controller.layout()
    }

    pub fn filter_state(&self) -> &FilterState {
        self.engine.state()
    }

    pub fn targets(&self) -> Arc<TargetMapping> {
        Arc::clone(&self.targets)
    }

    pub fn matching(&self) -> Vec<&Artifact> {
        self.engine.matching(&self.catalog)
    }

    pub fn option_counts(&self, key: FacetKey) -> Vec<(&'static str, usize)> {
        FacetFilterEngine::option_counts(&self.catalog, self.engine.state(), key)
    }

    pub fn summary(&self) -> ExplorerSummary {
        ExplorerSummary {
            total: self.catalog.len(),
            matching: self.matching().len(),
            gathered: self.targets.gathered_count(),
            active_facets: self.engine.state().active_count(),
            progress: self.engine.state().progress(),
        }
    }

    pub fn can_generate(&self) -> bool {
        self.engine.state().has_active()
    }

    pub fn set_facet(&mut self, key: FacetKey, value: &str) {
        self.engine.set_facet(key, value);
        self.republish();
    }

    pub fn set_facet_by_name(&mut self, name: &str, value: &str) -> Result<(), FacetError> {
        self.engine.set_facet_by_name(name, value)?;
        self.republish();
        Ok(())
    }

    pub fn clear_facet(&mut self, key: FacetKey) {
        self.engine.clear_facet(key);
        self.republish();
    }

    pub fn reset_all(&mut self) {
        self.engine.reset_all();
        self.republish();
    }

    pub fn wizard_view(&self) -> WizardView {
        self.wizard.view(&self.engine)
    }

    pub fn wizard_select(&mut self, value: &str) -> bool {
        self.wizard.select(value)
    }

    pub fn wizard_confirm(&mut self) -> bool {
        let accepted = self.wizard.confirm(&mut self.engine);
        if accepted {
            self.republish();
        }
        accepted
    }

    pub fn wizard_next(&mut self) -> Advance {
        self.wizard.next(&self.engine)
    }

    pub fn wizard_prev(&mut self) -> bool {
        self.wizard.prev(&self.engine)
    }

    pub fn wizard_reselect(&mut self) -> bool {
        let cleared = self.wizard.reselect_current(&mut self.engine);
        if cleared {
            self.republish();
        }
        cleared
    }

    pub fn wizard_reset(&mut self) {
        self.wizard.reset(&mut self.engine);
        self.republish();
    }

    fn republish(&mut self) {
        self.targets = self.controller.refresh(&self.catalog, self.engine.state());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explorer() -> Explorer {
        let catalog = Catalog::new(vec![
            Artifact::new("1").with_facet(FacetKey::Shape, "원형"),
            Artifact::new("2").with_facet(FacetKey::Shape, "사각형, 원형"),
            Artifact::new("3").with_facet(FacetKey::Shape, "삼각형"),
        ])
        .expect("unique ids");
        Explorer::new(
            Arc::new(catalog),
            SpatialLayout::default(),
            WizardOptions::default(),
        )
    }

    #[test]
    fn starts_with_a_published_dispersed_mapping() {
        let explorer = explorer();
        let targets = explorer.targets();
        assert_eq!(targets.len(), 3);
        assert_eq!(targets.revision(), 1);
        assert_eq!(targets.gathered_count(), 0);
        assert!(!explorer.can_generate());
    }

    #[test]
    fn every_mutation_republishes() {
        let mut explorer = explorer();
        explorer.set_facet(FacetKey::Shape, "원형");
        assert_eq!(explorer.targets().revision(), 2);
        assert_eq!(explorer.targets().gathered_count(), 2);

        explorer.clear_facet(FacetKey::Shape);
        assert_eq!(explorer.targets().revision(), 3);
        assert_eq!(explorer.targets().gathered_count(), 0);

        explorer.reset_all();
        assert_eq!(explorer.targets().revision(), 4);
    }

    #[test]
    fn rejected_wizard_transitions_do_not_republish() {
        let mut explorer = explorer();
        assert!(!explorer.wizard_confirm());
        assert!(!explorer.wizard_reselect());
        assert_eq!(explorer.wizard_next(), Advance::Rejected);
        assert_eq!(explorer.targets().revision(), 1);
    }

    #[test]
    fn invalid_facet_name_leaves_state_alone() {
        let mut explorer = explorer();
        assert!(explorer.set_facet_by_name("colour", "red").is_err());
        assert_eq!(explorer.targets().revision(), 1);
        assert!(explorer.set_facet_by_name("shape", "삼각형").is_ok());
        assert_eq!(explorer.targets().gathered_ids().collect::<Vec<_>>(), vec!["3"]);
    }

    #[test]
    fn summary_tracks_selection() {
        let mut explorer = explorer();
        explorer.set_facet(FacetKey::Shape, "원형");
        let summary = explorer.summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.matching, 2);
        assert_eq!(summary.gathered, 2);
        assert_eq!(summary.active_facets, 1);
        assert_eq!(summary.progress, 0.25);
        assert!(explorer.can_generate());
    }
}
