use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Load a flat locale table (`"<id> <Field>" -> text`).
///
/// Non-string values are skipped; they never name an item.
pub fn load_locale(path: &Path) -> Result<HashMap<String, String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file: {:?}", path))?;

    parse_locale(&contents).with_context(|| format!("Failed to parse locale file: {:?}", path))
}

pub fn parse_locale(json: &str) -> Result<HashMap<String, String>> {
    let raw: HashMap<String, Value> = serde_json::from_str(json).context("Failed to parse JSON")?;

    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(text) => Some((key, text)),
            _ => None,
        })
        .collect())
}
