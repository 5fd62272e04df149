use serde::Deserialize;

/// Template type of real, spawnable items. Everything else is a category node.
pub const ITEM_TYPE: &str = "Item";

/// A single item template record
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateItem {
    #[serde(rename = "_id")]
    pub id: String,
    /// Raw internal (non-localized) name
    #[serde(rename = "_name", default)]
    pub name: String,
    /// Parent template id, empty for the root node
    #[serde(rename = "_parent", default)]
    pub parent: String,
    /// Either "Item" or "Node"
    #[serde(rename = "_type", default)]
    pub item_type: String,
    #[serde(rename = "_proto", default)]
    pub proto: Option<String>,
    #[serde(rename = "_props", default)]
    pub props: ItemProps,
}

/// The subset of template properties used for naming
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemProps {
    #[serde(rename = "QuestItem", default)]
    pub quest_item: bool,
    /// Caliber of a round, e.g. "Caliber556x45NATO"
    #[serde(rename = "Caliber", default)]
    pub caliber: Option<String>,
    /// Caliber a weapon chambers
    #[serde(rename = "ammoCaliber", default)]
    pub ammo_caliber: Option<String>,
    /// Ammo box contents
    #[serde(rename = "StackSlots", default)]
    pub stack_slots: Vec<Slot>,
    /// Magazine contents
    #[serde(rename = "Cartridges", default)]
    pub cartridges: Vec<Slot>,
    #[serde(rename = "Grids", default)]
    pub grids: Vec<Grid>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    #[serde(rename = "_max_count", default)]
    pub max_count: Option<u32>,
    #[serde(rename = "_props", default)]
    pub props: SlotProps,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlotProps {
    #[serde(default)]
    pub filters: Vec<SlotFilter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlotFilter {
    #[serde(rename = "Filter", default)]
    pub filter: Vec<String>,
}

impl Slot {
    /// First item id accepted by this slot
    pub fn first_accepted(&self) -> Option<&str> {
        self.props
            .filters
            .first()
            .and_then(|f| f.filter.first())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Grid {
    #[serde(rename = "_props", default)]
    pub props: GridProps,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GridProps {
    #[serde(rename = "cellsH", default)]
    pub cells_h: Option<u32>,
    #[serde(rename = "cellsV", default)]
    pub cells_v: Option<u32>,
}

impl TemplateItem {
    pub fn is_item(&self) -> bool {
        self.item_type == ITEM_TYPE
    }
}
