mod engine;
mod key;
mod state;

use thiserror::Error;

pub use engine::FacetFilterEngine;
pub use key::FacetKey;
pub use state::FilterState;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FacetError {
    #[error("unknown facet key {0:?}; expected one of shape, material, era, usage")]
    InvalidFacetKey(String),
}
