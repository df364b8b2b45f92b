use serde::Serialize;

use crate::facet::{FacetFilterEngine, FacetKey};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum WizardStep {
    Facet(usize),
    Completed,
}

/// With the defaults, Confirm commits the candidate and leaves the step where
/// it is, so only Next moves forward. With `advance_on_first_confirm`, the
/// Confirm that gives a facet its first value also advances: Select then
/// Confirm on step 0 lands on step 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WizardOptions {
    pub advance_on_first_confirm: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Rejected,
    Step(usize),
    Completed,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WizardView {
    pub current_step: usize,
    pub facet_key: FacetKey,
    pub committed_value: Option<String>,
    pub candidate: Option<String>,
    pub confirmed: bool,
    pub can_advance: bool,
    pub can_retreat: bool,
    pub completed: bool,
    pub progress: f32,
}

fn facet_at(index: usize) -> FacetKey {
    FacetKey::ALL[index.min(FacetKey::COUNT - 1)]
}

/// Walks the facets one at a time, writing committed picks into the shared
/// filter engine.
///
/// A step counts as confirmed exactly when the engine holds a value for its
/// facet, so values kept while navigating backwards stay confirmed. Guarded
/// transitions never fail; they report `false` or [`Advance::Rejected`] and
/// leave every piece of state untouched.
#[derive(Clone, Debug)]
pub struct WizardProgression {
    step: WizardStep,
    candidate: Option<String>,
    options: WizardOptions,
}

impl Default for WizardProgression {
    fn default() -> Self {
        Self::new(WizardOptions::default())
    }
}

impl WizardProgression {
    pub fn new(options: WizardOptions) -> Self {
        Self {
            step: WizardStep::Facet(0),
            candidate: None,
            options,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn current_index(&self) -> usize {
        match self.step {
            WizardStep::Facet(index) => index,
            WizardStep::Completed => FacetKey::COUNT - 1,
        }
    }

    pub fn current_facet(&self) -> FacetKey {
        facet_at(self.current_index())
    }

    pub fn candidate(&self) -> Option<&str> {
        self.candidate.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.step == WizardStep::Completed
    }

    pub fn is_confirmed(&self, engine: &FacetFilterEngine) -> bool {
        match self.step {
            WizardStep::Facet(index) => engine.state().is_active(facet_at(index)),
            WizardStep::Completed => true,
        }
    }

    pub fn select(&mut self, value: &str) -> bool {
        if self.is_completed() {
            return false;
        }
        self.candidate = Some(value.to_owned());
        true
    }

    pub fn confirm(&mut self, engine: &mut FacetFilterEngine) -> bool {
        if self.is_completed() {
            return false;
        }
        let Some(candidate) = self.candidate.clone() else {
            return false;
        };

        let key = self.current_facet();
        let first_value = !engine.state().is_active(key);
        engine.commit_facet(key, &candidate);

        if first_value && self.options.advance_on_first_confirm {
            self.next(engine);
        }
        true
    }

    pub fn next(&mut self, engine: &FacetFilterEngine) -> Advance {
        let WizardStep::Facet(index) = self.step else {
            return Advance::Rejected;
        };
        if !self.is_confirmed(engine) {
            return Advance::Rejected;
        }

        if index + 1 >= FacetKey::COUNT {
            self.step = WizardStep::Completed;
            log::info!(
                "wizard completed with {} of {} facets committed",
                engine.state().active_count(),
                FacetKey::COUNT
            );
            return Advance::Completed;
        }

        self.enter(index + 1, engine);
        Advance::Step(index + 1)
    }

    pub fn prev(&mut self, engine: &FacetFilterEngine) -> bool {
        match self.step {
            WizardStep::Completed => {
                self.enter(FacetKey::COUNT - 1, engine);
                true
            }
            WizardStep::Facet(index) if index > 0 => {
                self.enter(index - 1, engine);
                true
            }
            WizardStep::Facet(_) => false,
        }
    }

    pub fn reselect_current(&mut self, engine: &mut FacetFilterEngine) -> bool {
        let WizardStep::Facet(index) = self.step else {
            return false;
        };
        let key = facet_at(index);
        if !engine.state().is_active(key) {
            return false;
        }
        engine.clear_facet(key);
        true
    }

    pub fn reset(&mut self, engine: &mut FacetFilterEngine) {
        engine.reset_all();
        self.enter(0, engine);
    }

    pub fn view(&self, engine: &FacetFilterEngine) -> WizardView {
        let key = self.current_facet();
        let completed = self.is_completed();
        let confirmed = self.is_confirmed(engine);

        WizardView {
            current_step: self.current_index(),
            facet_key: key,
            committed_value: engine.state().get(key).map(str::to_owned),
            candidate: self.candidate.clone(),
            confirmed,
            can_advance: !completed && confirmed,
            can_retreat: completed || self.current_index() > 0,
            completed,
            progress: engine.state().progress(),
        }
    }

    fn enter(&mut self, index: usize, engine: &FacetFilterEngine) {
        self.step = WizardStep::Facet(index);
        self.candidate = engine.state().get(facet_at(index)).map(str::to_owned);
    }
}
