use std::collections::{BTreeMap, HashMap, HashSet};

use super::discriminator::Discriminator;
use super::sanitize::sanitize_key;
use crate::error::DataError;

/// Counters collected while resolving collisions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Keys that received a discriminator suffix, old and new entries alike
    pub renamed: usize,
    /// Renamed keys that still collided and overwrote an entry
    pub residual: usize,
    /// Items left out because nothing distinguished them
    pub dropped: Vec<String>,
}

/// Working key -> item id table.
///
/// Items are fed in catalog order; the first item to claim a key keeps it
/// unless a later collision gives both items a discriminator suffix.
#[derive(Debug, Clone, Default)]
pub struct KeyTable {
    entries: HashMap<String, String>,
    /// Every key that collided at least once, including ones since renamed away
    collided: HashSet<String>,
    stats: ResolveStats,
}

impl KeyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `item_id` under `candidate`, splitting the key if it is taken
    pub fn resolve(
        mut self,
        candidate: String,
        item_id: &str,
        discriminator: &impl Discriminator,
    ) -> Result<Self, DataError> {
        let mut key = candidate;

        if self.entries.contains_key(&key) || self.collided.contains(&key) {
            self.collided.insert(key.clone());

            let Some(suffix) = discriminator.discriminator(item_id)? else {
                log::error!(
                    "Key {} already taken ({} => {}), dropping item",
                    key,
                    self.entries.get(&key).map_or("renamed", String::as_str),
                    item_id
                );
                self.stats.dropped.push(item_id.to_string());
                return Ok(self);
            };

            // Second claimant: move the first one out of the way too
            if let Some(existing_id) = self.entries.get(&key).cloned() {
                if let Some(existing_suffix) = discriminator.discriminator(&existing_id)? {
                    self.entries.remove(&key);
                    self.entries
                        .insert(sanitize_key(&format!("{}_{}", key, existing_suffix)), existing_id);
                    self.stats.renamed += 1;
                }
            }

            key = sanitize_key(&format!("{}_{}", key, suffix));
            self.stats.renamed += 1;

            if let Some(existing_id) = self.entries.get(&key) {
                log::error!(
                    "After rename, key {} is still taken ({} => {})",
                    key,
                    existing_id,
                    item_id
                );
                self.stats.residual += 1;
            }
        }

        self.entries.insert(key, item_id.to_string());
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> &ResolveStats {
        &self.stats
    }

    /// Finish the run: entries ordered by key, plus the collected counters
    pub fn into_sorted(self) -> (BTreeMap<String, String>, ResolveStats) {
        (self.entries.into_iter().collect(), self.stats)
    }
}
