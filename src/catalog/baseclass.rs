//! Baseclass nodes of the item template tree used for classification

use std::fmt;

/// Category nodes the naming rules care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Baseclass {
    Ammo,
    AmmoBox,
    BarterItem,
    KeyMechanical,
    LockableContainer,
    LootContainer,
    Magazine,
    MobContainer,
    RandomLootContainer,
    SimpleContainer,
    Stimulator,
    ThrowWeapon,
    Weapon,
}

pub const ALL_BASECLASSES: &[Baseclass] = &[
    Baseclass::Ammo,
    Baseclass::AmmoBox,
    Baseclass::BarterItem,
    Baseclass::KeyMechanical,
    Baseclass::LockableContainer,
    Baseclass::LootContainer,
    Baseclass::Magazine,
    Baseclass::MobContainer,
    Baseclass::RandomLootContainer,
    Baseclass::SimpleContainer,
    Baseclass::Stimulator,
    Baseclass::ThrowWeapon,
    Baseclass::Weapon,
];

impl Baseclass {
    /// Template id of the baseclass node
    pub const fn id(self) -> &'static str {
        match self {
            Baseclass::Ammo => "5485a8684bdc2da71d8b4567",
            Baseclass::AmmoBox => "543be5cb4bdc2deb348b4568",
            Baseclass::BarterItem => "5448eb774bdc2d0a728b4567",
            Baseclass::KeyMechanical => "5c99f98d86f7745c314214b3",
            Baseclass::LockableContainer => "5671435f4bdc2d96058b4569",
            Baseclass::LootContainer => "566965d44bdc2d814c8b4571",
            Baseclass::Magazine => "5448bc234bdc2d3c308b4569",
            Baseclass::MobContainer => "5448bf274bdc2dfc2f8b456a",
            Baseclass::RandomLootContainer => "62f109593b54472778797866",
            Baseclass::SimpleContainer => "5795f317245977243854e041",
            Baseclass::Stimulator => "5448f3a64bdc2d60728b456a",
            Baseclass::ThrowWeapon => "543be6564bdc2df4348b4568",
            Baseclass::Weapon => "5422acb9af1c889c16000029",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Baseclass::Ammo => "AMMO",
            Baseclass::AmmoBox => "AMMO_BOX",
            Baseclass::BarterItem => "BARTER_ITEM",
            Baseclass::KeyMechanical => "KEY_MECHANICAL",
            Baseclass::LockableContainer => "LOCKABLE_CONTAINER",
            Baseclass::LootContainer => "LOOT_CONTAINER",
            Baseclass::Magazine => "MAGAZINE",
            Baseclass::MobContainer => "MOB_CONTAINER",
            Baseclass::RandomLootContainer => "RANDOM_LOOT_CONTAINER",
            Baseclass::SimpleContainer => "SIMPLE_CONTAINER",
            Baseclass::Stimulator => "STIMULATOR",
            Baseclass::ThrowWeapon => "THROW_WEAPON",
            Baseclass::Weapon => "WEAPON",
        }
    }
}

impl fmt::Display for Baseclass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Answers baseclass membership questions about catalog items
pub trait BaseclassOracle {
    fn is_of_baseclass(&self, item_id: &str, baseclass: Baseclass) -> bool;
}
