pub mod baseclass;
pub mod locale;
pub mod types;

pub use baseclass::*;
pub use locale::*;
pub use types::*;

use indexmap::IndexMap;

use crate::error::DataError;

/// In-memory item template catalog.
///
/// Iteration follows the order the templates were loaded in, which decides
/// which of two colliding items keeps the plain key.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: IndexMap<String, TemplateItem>,
}

impl Catalog {
    pub fn new(items: IndexMap<String, TemplateItem>) -> Self {
        Self { items }
    }

    pub fn from_items(items: impl IntoIterator<Item = TemplateItem>) -> Self {
        Self {
            items: items.into_iter().map(|i| (i.id.clone(), i)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&TemplateItem> {
        self.items.get(id)
    }

    /// Look up an item another item refers to
    pub fn referenced(&self, from: &str, id: &str) -> Result<&TemplateItem, DataError> {
        self.get(id).ok_or_else(|| DataError::MissingItem {
            item: from.to_string(),
            referenced: id.to_string(),
        })
    }

    /// Direct parent of an item
    pub fn parent_of(&self, item: &TemplateItem) -> Result<&TemplateItem, DataError> {
        self.get(&item.parent).ok_or_else(|| DataError::MissingParent {
            item: item.id.clone(),
            parent: item.parent.clone(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl BaseclassOracle for Catalog {
    /// Walks the parent chain, counting the item itself as a member of its
    /// own id. The walk is bounded by the catalog size so a cyclic parent
    /// chain terminates.
    fn is_of_baseclass(&self, item_id: &str, baseclass: Baseclass) -> bool {
        let target = baseclass.id();
        let mut current = item_id;

        for _ in 0..=self.items.len() {
            if current == target {
                return true;
            }
            match self.items.get(current) {
                Some(item) if !item.parent.is_empty() => current = &item.parent,
                _ => return false,
            }
        }

        false
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_of_baseclass_walks_parents() {
        let catalog = catalog_with(vec![
            node("loot_sub", "SubLoot", Baseclass::LootContainer.id()),
            item("crate", "dead_scav", "loot_sub", json!({})),
        ]);

        assert!(catalog.is_of_baseclass("crate", Baseclass::LootContainer));
        assert!(!catalog.is_of_baseclass("crate", Baseclass::RandomLootContainer));
        assert!(!catalog.is_of_baseclass("crate", Baseclass::Weapon));
        assert!(catalog.is_of_baseclass(Baseclass::Weapon.id(), Baseclass::Weapon));
        assert!(!catalog.is_of_baseclass("missing", Baseclass::Weapon));
    }

    #[test]
    fn test_is_of_baseclass_terminates_on_cycle() {
        let catalog = Catalog::from_items(vec![
            node("a", "A", "b"),
            node("b", "B", "a"),
        ]);
        assert!(!catalog.is_of_baseclass("a", Baseclass::Ammo));
    }

    #[test]
    fn test_parent_of_missing() {
        let catalog = Catalog::from_items(vec![item("orphan", "orphan", "nowhere", json!({}))]);
        let orphan = catalog.get("orphan").unwrap();
        assert_eq!(
            catalog.parent_of(orphan).unwrap_err(),
            DataError::MissingParent {
                item: "orphan".to_string(),
                parent: "nowhere".to_string(),
            }
        );
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let catalog = Catalog::from_items(vec![
            node("z", "Z", ""),
            node("a", "A", ""),
            node("m", "M", ""),
        ]);
        let ids: Vec<_> = catalog.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["z", "a", "m"]);
    }
}
