use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Default location of the generated table
pub const DEFAULT_OUTPUT_PATH: &str = "src/items.json";

const INDENT: &[u8] = b"    ";

/// Render the key table as a 4-space indented JSON object, keys ascending
pub fn render_table(table: &BTreeMap<String, String>) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    table
        .serialize(&mut ser)
        .context("Failed to serialize key table")?;

    String::from_utf8(buf).context("Serialized key table is not UTF-8")
}

/// Write the key table, replacing any previous file at `path`.
///
/// The table is written to a temporary file next to `path` and renamed into
/// place, so a failed run never leaves a truncated table behind.
pub fn write_table(path: &Path, table: &BTreeMap<String, String>) -> Result<()> {
    let rendered = render_table(table)?;

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {:?}", dir))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {:?}", dir))?;
    tmp.write_all(rendered.as_bytes())
        .context("Failed to write key table")?;
    tmp.persist(path)
        .with_context(|| format!("Failed to replace output file: {:?}", path))?;

    Ok(())
}
