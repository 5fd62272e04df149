use super::sanitize::{bracket_suffix, clean_caliber, number_suffix};
use super::Namer;
use crate::catalog::{Baseclass, BaseclassOracle, LocaleField, LocaleLookup, TemplateItem};
use crate::error::DataError;

/// Source of secondary names used to split colliding keys
pub trait Discriminator {
    /// Extra key fragment for `item_id`, or `None` when the item has nothing
    /// that tells it apart
    fn discriminator(&self, item_id: &str) -> Result<Option<String>, DataError>;
}

impl<'a, O: BaseclassOracle, L: LocaleLookup> Discriminator for Namer<'a, O, L> {
    fn discriminator(&self, item_id: &str) -> Result<Option<String>, DataError> {
        let item = self.catalog.referenced(item_id, item_id)?;
        let suffix = self.name_suffix(item)?;
        Ok(Some(suffix).filter(|s| !s.is_empty()))
    }
}

impl<'a, O: BaseclassOracle, L: LocaleLookup> Namer<'a, O, L> {
    fn name_suffix(&self, item: &TemplateItem) -> Result<String, DataError> {
        let full_name = self.locale.item_text(&item.id, LocaleField::Name);

        // Loot containers share names, their grid size differs
        if self.is(item, Baseclass::LootContainer) {
            let grid = item
                .props
                .grids
                .first()
                .ok_or_else(|| DataError::missing_property(&item.id, "Grids"))?;
            let (Some(h), Some(v)) = (grid.props.cells_h, grid.props.cells_v) else {
                return Err(DataError::missing_property(&item.id, "cellsH/cellsV"));
            };
            return Ok(format!("{}X{}", h, v));
        }

        if self.is(item, Baseclass::Weapon) {
            let caliber = item
                .props
                .ammo_caliber
                .as_deref()
                .ok_or_else(|| DataError::missing_property(&item.id, "ammoCaliber"))?;
            let caliber = clean_caliber(caliber);

            return Ok(match full_name.and_then(bracket_suffix) {
                Some(variant) => format!("{}_{}", caliber, variant),
                None => caliber,
            });
        }

        // Every random loot container has the same localized name
        if self.is(item, Baseclass::RandomLootContainer) {
            return Ok(item.name.clone());
        }

        let Some(full_name) = full_name else {
            return Ok(String::new());
        };

        Ok(bracket_suffix(full_name)
            .or_else(|| number_suffix(full_name))
            .unwrap_or_default()
            .to_string())
    }
}
