//! End-to-end key generation over a loaded catalog

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;

use crate::catalog::{BaseclassOracle, Catalog, LocaleLookup};
use crate::error::DataError;
use crate::filter::is_eligible;
use crate::naming::{classify, KeyTable, NameOverrides, Namer};
use crate::parser::{load_catalog, load_locale, load_overrides};
use crate::writer::write_table;

/// Outcome of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Templates skipped by the eligibility filter
    pub skipped: usize,
    /// Eligible items without a resolvable display name
    pub unnamed: usize,
    pub renamed: usize,
    pub residual: usize,
    /// Items dropped over an unresolvable collision
    pub dropped: Vec<String>,
}

/// Sorted key -> item id table and how it was built
#[derive(Debug, Clone)]
pub struct Generation {
    pub table: BTreeMap<String, String>,
    pub summary: Summary,
}

/// Derive a key for every eligible item, in catalog order
pub fn generate_keys(
    catalog: &Catalog,
    oracle: &impl BaseclassOracle,
    locale: &impl LocaleLookup,
    overrides: &NameOverrides,
) -> Result<Generation, DataError> {
    let namer = Namer::new(catalog, oracle, locale, overrides);
    let mut skipped = 0;
    let mut unnamed = 0;

    let table = catalog.iter().try_fold(KeyTable::new(), |table, item| {
        if !is_eligible(item) {
            skipped += 1;
            return Ok(table);
        }

        let category = classify(item, catalog, oracle)?;
        let candidate = namer.compose(item, &category)?;
        if !candidate.named {
            unnamed += 1;
        }

        table.resolve(candidate.key, &item.id, &namer)
    })?;

    let (table, stats) = table.into_sorted();

    Ok(Generation {
        table,
        summary: Summary {
            skipped,
            unnamed,
            renamed: stats.renamed,
            residual: stats.residual,
            dropped: stats.dropped,
        },
    })
}

/// Input and output locations for one run
#[derive(Debug, Clone)]
pub struct GeneratePaths<'a> {
    pub catalog: &'a Path,
    pub locale: &'a Path,
    pub overrides: &'a Path,
    /// `None` runs without writing anything
    pub output: Option<&'a Path>,
}

/// Load inputs, generate the table and write it
pub fn run(paths: &GeneratePaths) -> Result<Generation> {
    let catalog = load_catalog(paths.catalog)?;
    let locale = load_locale(paths.locale)?;
    let overrides = load_overrides(paths.overrides)?;

    log::info!(
        "Loaded {} templates, {} locale entries, {} overrides",
        catalog.len(),
        locale.len(),
        overrides.len()
    );

    let generation = generate_keys(&catalog, &catalog, &locale, &overrides)?;

    if let Some(output) = paths.output {
        write_table(output, &generation.table)?;
        log::info!("Wrote {} keys to {:?}", generation.table.len(), output);
    }

    Ok(generation)
}
