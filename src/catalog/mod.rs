mod load;
mod model;
mod parse;

pub use load::load_catalog;
pub use model::{Artifact, Catalog};
pub use parse::parse_catalog;
