use std::fmt;

use crate::catalog::{Baseclass, BaseclassOracle, Catalog, TemplateItem};
use crate::error::DataError;

/// Flare gun; named on its own rather than as a grenade launcher
pub const SIGNAL_PISTOL_ID: &str = "620109578d82e67e7911abf2";

/// Category family an item is keyed under. Its name is the key's first fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Quest,
    Barter,
    Grenade,
    Stim,
    Magazine,
    Key,
    Secure,
    Container,
    SignalPistol,
    /// Uppercased raw name of the item's direct parent node
    Parent(String),
}

impl Category {
    pub fn prefix(&self) -> &str {
        match self {
            Category::Quest => "QUEST",
            Category::Barter => "BARTER",
            Category::Grenade => "GRENADE",
            Category::Stim => "STIM",
            Category::Magazine => "MAGAZINE",
            Category::Key => "KEY",
            Category::Secure => "SECURE",
            Category::Container => "CONTAINER",
            Category::SignalPistol => "SIGNALPISTOL",
            Category::Parent(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Baseclass checks in priority order; the first match wins
const BASECLASS_CATEGORIES: &[(Baseclass, Category)] = &[
    (Baseclass::BarterItem, Category::Barter),
    (Baseclass::ThrowWeapon, Category::Grenade),
    (Baseclass::Stimulator, Category::Stim),
    (Baseclass::Magazine, Category::Magazine),
    (Baseclass::KeyMechanical, Category::Key),
    (Baseclass::MobContainer, Category::Secure),
    (Baseclass::SimpleContainer, Category::Container),
];

pub fn classify(
    item: &TemplateItem,
    catalog: &Catalog,
    oracle: &impl BaseclassOracle,
) -> Result<Category, DataError> {
    if item.props.quest_item {
        return Ok(Category::Quest);
    }

    for (baseclass, category) in BASECLASS_CATEGORIES {
        if oracle.is_of_baseclass(&item.id, *baseclass) {
            return Ok(category.clone());
        }
    }

    if item.id == SIGNAL_PISTOL_ID {
        return Ok(Category::SignalPistol);
    }

    let parent = catalog.parent_of(item)?;
    Ok(Category::Parent(parent.name.to_uppercase()))
}
