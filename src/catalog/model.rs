use std::collections::HashMap;

use anyhow::{Result, anyhow};

use crate::facet::FacetKey;
use crate::util::split_values;

#[derive(Clone, Debug, PartialEq)]
pub struct Artifact {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub images: Vec<String>,
    pub related: Vec<String>,
    facets: [Option<String>; FacetKey::COUNT],
}

impl Artifact {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            description: None,
            thumbnail: None,
            images: Vec::new(),
            related: Vec::new(),
            facets: Default::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_facet(mut self, key: FacetKey, value: impl Into<String>) -> Self {
        self.set_facet(key, Some(value.into()));
        self
    }

    pub fn set_facet(&mut self, key: FacetKey, value: Option<String>) {
        self.facets[key.index()] = value;
    }

    pub fn facet(&self, key: FacetKey) -> Option<&str> {
        self.facets[key.index()].as_deref()
    }

    pub fn facet_values(&self, key: FacetKey) -> Vec<&str> {
        match self.facet(key) {
            None => Vec::new(),
            Some(raw) if key.is_multi_valued() && raw.contains(',') => split_values(raw).collect(),
            Some(raw) => vec![raw],
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    artifacts: Vec<Artifact>,
    index_by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(artifacts: Vec<Artifact>) -> Result<Self> {
        let mut index_by_id = HashMap::with_capacity(artifacts.len());
        for (index, artifact) in artifacts.iter().enumerate() {
            if let Some(previous) = index_by_id.insert(artifact.id.clone(), index) {
                return Err(anyhow!(
                    "duplicate artifact id {:?} at positions {previous} and {index}",
                    artifact.id
                ));
            }
        }

        Ok(Self {
            artifacts,
            index_by_id,
        })
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Artifact> {
        self.artifacts.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Artifact> {
        self.position(id).map(|index| &self.artifacts[index])
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
