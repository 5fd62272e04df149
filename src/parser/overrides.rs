use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::naming::NameOverrides;

/// Default location of the manual name overrides
pub const DEFAULT_OVERRIDES_PATH: &str = "config/itemOverrides.json5";

/// Load manual name overrides from a JSON5 file of item id -> name
pub fn load_overrides(path: &Path) -> Result<NameOverrides> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read overrides: {:?}", path))?;

    parse_overrides(&contents).with_context(|| format!("Failed to parse overrides: {:?}", path))
}

pub fn parse_overrides(json5_text: &str) -> Result<NameOverrides> {
    json5::from_str(json5_text).context("Invalid JSON5")
}
