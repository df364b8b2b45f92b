use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::Catalog;
use super::parse::parse_catalog;

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;

    let catalog = parse_catalog(&raw)
        .with_context(|| format!("failed to parse catalog file {}", path.display()))?;

    log::info!(
        "loaded {} artifacts from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}
