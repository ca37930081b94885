//! Bulk load of the planet catalog.
//!
//! The catalog file is a JSON array of objects keyed by NASA Exoplanet
//! Archive column names. Loading is all-or-nothing at the file level but
//! lenient per record: malformed, nameless and duplicate records are skipped
//! with a warning and the rest of the catalog loads.

use std::fs;
use std::path::Path;

use exo_core::{Catalog, CatalogRejection, PlanetRecord};
use serde_json::Value;

use crate::error::{CatalogError, Result};

/// Read and parse the catalog at `path`.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let catalog = parse_catalog(&content)?;
    tracing::info!("loaded {} planets from {}", catalog.len(), path.display());
    Ok(catalog)
}

pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let Value::Array(rows) = serde_json::from_str::<Value>(json)? else {
        return Err(CatalogError::InvalidData(
            "catalog must be a JSON array of planet records".to_string(),
        ));
    };

    let mut catalog = Catalog::new();
    let mut skipped = 0usize;
    for (i, row) in rows.into_iter().enumerate() {
        let record: PlanetRecord = match serde_json::from_value(row) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("skipping catalog row {i}: {e}");
                skipped += 1;
                continue;
            }
        };
        match catalog.push(record) {
            Ok(()) => {}
            Err(CatalogRejection::BlankName) => {
                tracing::warn!("skipping catalog row {i}: no planet name");
                skipped += 1;
            }
            Err(CatalogRejection::DuplicateName(name)) => {
                tracing::warn!("skipping catalog row {i}: '{name}' already loaded");
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        tracing::info!("skipped {skipped} catalog rows");
    }
    Ok(catalog)
}
