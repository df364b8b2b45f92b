//! Faceted filtering over an artifact catalog, with a deterministic 3D layout
//! that gathers every matching artifact onto a Fibonacci sphere.

pub mod catalog;
pub mod cluster;
pub mod explorer;
pub mod facet;
pub mod layout;
pub mod util;
pub mod wizard;

pub use catalog::{Artifact, Catalog, load_catalog, parse_catalog};
pub use cluster::{ClusterStateController, ClusterTarget, Emphasis, TargetMapping};
pub use explorer::{Explorer, ExplorerSummary};
pub use facet::{FacetError, FacetFilterEngine, FacetKey, FilterState};
pub use layout::{LayoutConfig, LayoutConfigError, Position3D, SpatialLayout};
pub use wizard::{Advance, WizardOptions, WizardProgression, WizardStep, WizardView};
