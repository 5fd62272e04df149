use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

use crate::catalog::{Catalog, TemplateItem};

/// Load an item template file: a JSON object of item id -> template.
///
/// Templates keep the order they appear in the file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read item catalog: {:?}", path))?;

    parse_catalog(&contents).with_context(|| format!("Failed to parse item catalog: {:?}", path))
}

pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let items: IndexMap<String, TemplateItem> =
        serde_json::from_str(json).context("Failed to parse JSON")?;

    for (key, item) in &items {
        if *key != item.id {
            log::warn!("Catalog entry {} carries template id {}", key, item.id);
        }
    }

    Ok(Catalog::new(items))
}
