use serde::{Deserialize, Serialize};

use super::FacetKey;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    selected: [Option<String>; FacetKey::COUNT],
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: FacetKey) -> Option<&str> {
        self.selected[key.index()].as_deref()
    }

    pub fn is_active(&self, key: FacetKey) -> bool {
        self.selected[key.index()].is_some()
    }

    pub fn set(&mut self, key: FacetKey, value: impl Into<String>) {
        self.selected[key.index()] = Some(value.into());
    }

    /// Returns the value that was cleared, if any.
    pub fn clear(&mut self, key: FacetKey) -> Option<String> {
        self.selected[key.index()].take()
    }

    pub fn clear_all(&mut self) {
        for slot in &mut self.selected {
            *slot = None;
        }
    }

    pub fn has_active(&self) -> bool {
        self.selected.iter().any(Option::is_some)
    }

    pub fn active_count(&self) -> usize {
        self.selected.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn active(&self) -> impl Iterator<Item = (FacetKey, &str)> + '_ {
        FacetKey::ALL
            .iter()
            .filter_map(|&key| self.get(key).map(|value| (key, value)))
    }

    pub fn progress(&self) -> f32 {
        self.active_count() as f32 / FacetKey::COUNT as f32
    }

    pub fn with(mut self, key: FacetKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let state = FilterState::new();
        assert!(!state.has_active());
        assert_eq!(state.active_count(), 0);
        assert_eq!(state.progress(), 0.0);
        for key in FacetKey::ALL {
            assert_eq!(state.get(key), None);
        }
    }

    #[test]
    fn active_iterates_in_facet_order() {
        let state = FilterState::new()
            .with(FacetKey::Usage, "군사")
            .with(FacetKey::Shape, "원형");
        let active = state.active().collect::<Vec<_>>();
        assert_eq!(active, vec![(FacetKey::Shape, "원형"), (FacetKey::Usage, "군사")]);
        assert_eq!(state.progress(), 0.5);
    }

    #[test]
    fn clear_returns_previous_value() {
        let mut state = FilterState::new().with(FacetKey::Era, "고려");
        assert_eq!(state.clear(FacetKey::Era), Some("고려".to_owned()));
        assert_eq!(state.clear(FacetKey::Era), None);
        assert!(!state.has_active());
    }

    #[test]
    fn clear_all_resets_every_facet() {
        let mut state = FilterState::new()
            .with(FacetKey::Shape, "원형")
            .with(FacetKey::Material, "금속");
        state.clear_all();
        assert_eq!(state, FilterState::new());
    }
}
