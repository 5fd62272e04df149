use super::classify::Category;
use super::sanitize::{clean_caliber, clean_display_name, sanitize_key, with_separator};
use super::Namer;
use crate::catalog::{Baseclass, BaseclassOracle, LocaleField, LocaleLookup, Slot, TemplateItem};
use crate::error::DataError;

/// A composed key before collision handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub key: String,
    /// False when no display name could be resolved and the name fragment is empty
    pub named: bool,
}

impl<'a, O: BaseclassOracle, L: LocaleLookup> Namer<'a, O, L> {
    /// Build the candidate key `CATEGORY[_CALIBER][_NAME][_SUFFIX]` for an item
    pub fn compose(&self, item: &TemplateItem, category: &Category) -> Result<Candidate, DataError> {
        let parent = category.prefix();
        let prefix = self.caliber_prefix(item)?;
        let name = self.base_name(item);
        let suffix = self.suffix(item)?;
        let named = !name.is_empty();

        let name = if prefix.is_empty() {
            collapse_repeated_parent(parent, name)
        } else {
            name
        };

        Ok(Candidate {
            key: sanitize_key(&format!("{}{}{}{}", parent, prefix, name, suffix)),
            named,
        })
    }

    /// Caliber of rounds, ammo boxes and magazines
    fn caliber_prefix(&self, item: &TemplateItem) -> Result<String, DataError> {
        let caliber = if self.is(item, Baseclass::Ammo) {
            ammo_caliber(item)?.to_string()
        } else if self.is(item, Baseclass::AmmoBox) {
            self.slot_caliber(item, &item.props.stack_slots, "StackSlots")?
        } else if self.is(item, Baseclass::Magazine) {
            self.slot_caliber(item, &item.props.cartridges, "Cartridges")?
        } else {
            return Ok(String::new());
        };

        Ok(with_separator(clean_caliber(&caliber)))
    }

    /// Caliber of the first round the first slot accepts
    fn slot_caliber(
        &self,
        item: &TemplateItem,
        slots: &[Slot],
        property: &'static str,
    ) -> Result<String, DataError> {
        let ammo_id = slots
            .first()
            .and_then(Slot::first_accepted)
            .ok_or_else(|| DataError::missing_property(&item.id, property))?;
        let ammo = self.catalog.referenced(&item.id, ammo_id)?;

        Ok(ammo_caliber(ammo)?.to_string())
    }

    fn base_name(&self, item: &TemplateItem) -> String {
        let name = match self.overrides.get(&item.id) {
            Some(name) => Some(name),
            None if self.is(item, Baseclass::LockableContainer) => {
                self.locale.item_text(&item.id, LocaleField::Name)
            }
            None => self.locale.item_text(&item.id, LocaleField::ShortName),
        };

        match name {
            Some(name) => format!("_{}", clean_display_name(name)),
            None => {
                log::debug!("Unable to get short name for {}", item.id);
                String::new()
            }
        }
    }

    /// Capacity of magazines and ammo boxes, plus a damaged marker
    fn suffix(&self, item: &TemplateItem) -> Result<String, DataError> {
        let mut suffix = if self.is(item, Baseclass::Magazine) {
            capacity(item, &item.props.cartridges, "Cartridges")?
        } else if self.is(item, Baseclass::AmmoBox) {
            capacity(item, &item.props.stack_slots, "StackSlots")?
        } else {
            String::new()
        };

        if item.name.to_lowercase().contains("damaged") {
            suffix.push_str("_DAMAGED");
        }

        Ok(with_separator(suffix))
    }
}

fn ammo_caliber(ammo: &TemplateItem) -> Result<&str, DataError> {
    ammo.props
        .caliber
        .as_deref()
        .ok_or_else(|| DataError::missing_property(&ammo.id, "Caliber"))
}

fn capacity(item: &TemplateItem, slots: &[Slot], property: &'static str) -> Result<String, DataError> {
    let count = slots
        .first()
        .and_then(|s| s.max_count)
        .ok_or_else(|| DataError::missing_property(&item.id, property))?;

    Ok(format!("{}RND", count))
}

/// Drop a name that repeats its own category, e.g. "_POCKETS" under "POCKETS"
fn collapse_repeated_parent(parent: &str, name: String) -> String {
    match name.get(1..).and_then(|rest| rest.strip_prefix(parent)) {
        Some(rest) => with_separator(rest.to_string()),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::*;
    use crate::catalog::Catalog;
    use crate::naming::{classify, NameOverrides};
    use serde_json::json;
    use std::collections::HashMap;

    fn locale(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn key_of(catalog: &Catalog, locale: &HashMap<String, String>, id: &str) -> Candidate {
        key_with_overrides(catalog, locale, &NameOverrides::default(), id)
    }

    fn key_with_overrides(
        catalog: &Catalog,
        locale: &HashMap<String, String>,
        overrides: &NameOverrides,
        id: &str,
    ) -> Candidate {
        let namer = Namer::new(catalog, catalog, locale, overrides);
        let item = catalog.get(id).unwrap();
        let category = classify(item, catalog, catalog).unwrap();
        namer.compose(item, &category).unwrap()
    }

    fn ammo_catalog() -> Catalog {
        catalog_with(vec![
            item(
                "ps",
                "patron_545x39_PS",
                Baseclass::Ammo.id(),
                json!({ "Caliber": "Caliber545x39" }),
            ),
            item(
                "box",
                "ammo_box_545x39_ps",
                Baseclass::AmmoBox.id(),
                json!({ "StackSlots": [{ "_max_count": 120, "_props": { "filters": [{ "Filter": ["ps"] }] } }] }),
            ),
            item(
                "mag",
                "mag_ak74_izhmash_6L20_545x39_30",
                Baseclass::Magazine.id(),
                json!({ "Cartridges": [{ "_max_count": 30, "_props": { "filters": [{ "Filter": ["ps"] }] } }] }),
            ),
        ])
    }

    #[test]
    fn test_ammo_gets_caliber_prefix() {
        let catalog = ammo_catalog();
        let locale = locale(&[("ps ShortName", "PS gs")]);
        assert_eq!(key_of(&catalog, &locale, "ps").key, "AMMO_545X39_PS_GS");
    }

    #[test]
    fn test_ammo_box_prefix_and_capacity() {
        let catalog = ammo_catalog();
        let locale = locale(&[("box ShortName", "PS")]);
        assert_eq!(key_of(&catalog, &locale, "box").key, "AMMOBOX_545X39_PS_120RND");
    }

    #[test]
    fn test_magazine_prefix_and_capacity() {
        let catalog = ammo_catalog();
        let locale = locale(&[("mag ShortName", "6L20")]);
        assert_eq!(key_of(&catalog, &locale, "mag").key, "MAGAZINE_545X39_6L20_30RND");
    }

    #[test]
    fn test_magazine_without_cartridges_is_fatal() {
        let catalog = catalog_with(vec![item("mag", "mag", Baseclass::Magazine.id(), json!({}))]);
        let overrides = NameOverrides::default();
        let locale = locale(&[]);
        let namer = Namer::new(&catalog, &catalog, &locale, &overrides);
        let mag = catalog.get("mag").unwrap();

        assert_eq!(
            namer.compose(mag, &Category::Magazine).unwrap_err(),
            DataError::MissingProperty {
                item: "mag".to_string(),
                property: "Cartridges",
            }
        );
    }

    #[test]
    fn test_ammo_box_with_unknown_round_is_fatal() {
        let catalog = catalog_with(vec![item(
            "box",
            "box",
            Baseclass::AmmoBox.id(),
            json!({ "StackSlots": [{ "_max_count": 20, "_props": { "filters": [{ "Filter": ["nope"] }] } }] }),
        )]);
        let overrides = NameOverrides::default();
        let locale = locale(&[]);
        let namer = Namer::new(&catalog, &catalog, &locale, &overrides);
        let category = Category::Parent("AMMOBOX".to_string());

        assert!(matches!(
            namer.compose(catalog.get("box").unwrap(), &category),
            Err(DataError::MissingItem { .. })
        ));
    }

    #[test]
    fn test_override_beats_locale() {
        let catalog = catalog_with(vec![item("b", "bolts", Baseclass::BarterItem.id(), json!({}))]);
        let locale = locale(&[("b ShortName", "Bolts")]);
        let overrides: NameOverrides = [("b".to_string(), "Pack of bolts".to_string())]
            .into_iter()
            .collect();

        assert_eq!(
            key_with_overrides(&catalog, &locale, &overrides, "b").key,
            "BARTER_PACK_OF_BOLTS"
        );
    }

    #[test]
    fn test_lockable_container_uses_full_name() {
        let catalog = catalog_with(vec![item(
            "safe",
            "safe",
            Baseclass::LockableContainer.id(),
            json!({}),
        )]);
        let locale = locale(&[("safe ShortName", "Safe"), ("safe Name", "Weapon safe")]);
        assert_eq!(key_of(&catalog, &locale, "safe").key, "LOCKABLECONTAINER_WEAPON_SAFE");
    }

    #[test]
    fn test_damaged_marker_uses_internal_name() {
        let catalog = catalog_with(vec![item(
            "hd",
            "barter_electr_hdd_Damaged",
            Baseclass::BarterItem.id(),
            json!({}),
        )]);
        let locale = locale(&[("hd ShortName", "HDD")]);
        assert_eq!(key_of(&catalog, &locale, "hd").key, "BARTER_HDD_DAMAGED");
    }

    #[test]
    fn test_missing_name_keeps_item() {
        let catalog = catalog_with(vec![item("k", "key_unknown", Baseclass::KeyMechanical.id(), json!({}))]);
        let candidate = key_of(&catalog, &locale(&[]), "k");
        assert_eq!(candidate.key, "KEY");
        assert!(!candidate.named);
    }

    #[test]
    fn test_repeated_category_is_collapsed() {
        let catalog = catalog_with(vec![item(
            "c",
            "container_case",
            Baseclass::SimpleContainer.id(),
            json!({}),
        )]);
        let locale = locale(&[("c ShortName", "Container case")]);
        let candidate = key_of(&catalog, &locale, "c");
        assert_eq!(candidate.key, "CONTAINER_CASE");
        assert!(!candidate.key.contains("CONTAINER_CONTAINER"));
    }

    #[test]
    fn test_name_equal_to_category_collapses_to_category() {
        let catalog = catalog_with(vec![
            node("pockets_node", "Pockets", crate::catalog::fixtures::ROOT_ID),
            item("p", "pockets", "pockets_node", json!({})),
        ]);
        let locale = locale(&[("p ShortName", "Pockets")]);
        assert_eq!(key_of(&catalog, &locale, "p").key, "POCKETS");
    }

    #[test]
    fn test_collapse_skipped_when_caliber_present() {
        assert_eq!(collapse_repeated_parent("AMMO", "_AMMOX".to_string()), "_X");
        assert_eq!(collapse_repeated_parent("AMMO", "_PS".to_string()), "_PS");
        assert_eq!(collapse_repeated_parent("AMMO", String::new()), "");

        // A round literally named "Ammo" keeps its name behind the caliber
        let catalog = catalog_with(vec![item(
            "a",
            "ammo",
            Baseclass::Ammo.id(),
            json!({ "Caliber": "Caliber9x19PARA" }),
        )]);
        let locale = locale(&[("a ShortName", "Ammo")]);
        assert_eq!(key_of(&catalog, &locale, "a").key, "AMMO_9X19_AMMO");
    }
}
