//! Enum key derivation: classification, key composition and collision handling

pub mod classify;
pub mod compose;
pub mod discriminator;
pub mod resolve;
pub mod sanitize;

pub use classify::{classify, Category, SIGNAL_PISTOL_ID};
pub use compose::Candidate;
pub use discriminator::Discriminator;
pub use resolve::{KeyTable, ResolveStats};
pub use sanitize::{clean_caliber, sanitize_key};

use serde::Deserialize;
use std::collections::HashMap;

use crate::catalog::{Baseclass, BaseclassOracle, Catalog, LocaleLookup, TemplateItem};

/// Manual display names keyed by item id, used instead of the localized short name
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct NameOverrides(HashMap<String, String>);

impl NameOverrides {
    pub fn get(&self, item_id: &str) -> Option<&str> {
        self.0
            .get(item_id)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for NameOverrides {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Everything key derivation reads, borrowed for the length of one run
pub struct Namer<'a, O, L> {
    catalog: &'a Catalog,
    oracle: &'a O,
    locale: &'a L,
    overrides: &'a NameOverrides,
}

impl<'a, O: BaseclassOracle, L: LocaleLookup> Namer<'a, O, L> {
    pub fn new(
        catalog: &'a Catalog,
        oracle: &'a O,
        locale: &'a L,
        overrides: &'a NameOverrides,
    ) -> Self {
        Self {
            catalog,
            oracle,
            locale,
            overrides,
        }
    }

    fn is(&self, item: &TemplateItem, baseclass: Baseclass) -> bool {
        self.oracle.is_of_baseclass(&item.id, baseclass)
    }
}
