use std::collections::HashSet;

use crate::catalog::{Artifact, Catalog};
use crate::util::split_values;

use super::{FacetError, FacetKey, FilterState};

// Conjunctive across facets; an artifact missing an active facet's attribute never matches.
#[derive(Clone, Debug, Default)]
pub struct FacetFilterEngine {
    state: FilterState,
}

impl FacetFilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: FilterState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Selects `value` for `key`, or clears the facet when `value` is already
    /// selected. Returns the selection now in effect.
    pub fn set_facet(&mut self, key: FacetKey, value: &str) -> Option<&str> {
        if self.state.get(key) == Some(value) {
            self.state.clear(key);
        } else {
            self.state.set(key, value);
        }
        self.state.get(key)
    }

    pub fn set_facet_by_name(
        &mut self,
        name: &str,
        value: &str,
    ) -> Result<Option<&str>, FacetError> {
        let key = name.parse::<FacetKey>()?;
        Ok(self.set_facet(key, value))
    }

    pub fn commit_facet(&mut self, key: FacetKey, value: &str) {
        self.state.set(key, value);
    }

    pub fn clear_facet(&mut self, key: FacetKey) {
        self.state.clear(key);
    }

    pub fn reset_all(&mut self) {
        self.state.clear_all();
    }

    pub fn matches(artifact: &Artifact, state: &FilterState) -> bool {
        state
            .active()
            .all(|(key, expected)| facet_matches(artifact, key, expected))
    }

    pub fn filtered_set<'a>(catalog: &'a Catalog, state: &FilterState) -> Vec<&'a Artifact> {
        catalog
            .iter()
            .filter(|artifact| Self::matches(artifact, state))
            .collect()
    }

    pub fn matching<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Artifact> {
        Self::filtered_set(catalog, &self.state)
    }

    pub fn observed_values(catalog: &Catalog, key: FacetKey) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut values = Vec::new();
        for artifact in catalog {
            for value in artifact.facet_values(key) {
                if seen.insert(value) {
                    values.push(value.to_owned());
                }
            }
        }
        values
    }

    /// For each vocabulary value of `key`, the size of the matching set if that
    /// value were selected for `key` while every other facet stays as-is.
    pub fn option_counts(
        catalog: &Catalog,
        state: &FilterState,
        key: FacetKey,
    ) -> Vec<(&'static str, usize)> {
        let mut others = state.clone();
        others.clear(key);
        let candidates = Self::filtered_set(catalog, &others);

        key.vocabulary()
            .iter()
            .map(|&option| {
                let count = candidates
                    .iter()
                    .filter(|artifact| facet_matches(artifact, key, option))
                    .count();
                (option, count)
            })
            .collect()
    }
}

fn facet_matches(artifact: &Artifact, key: FacetKey, expected: &str) -> bool {
    let Some(raw) = artifact.facet(key) else {
        return false;
    };

    if key.is_multi_valued() && raw.contains(',') {
        split_values(raw).any(|value| value == expected)
    } else {
        raw == expected
    }
}
