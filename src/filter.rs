use crate::catalog::TemplateItem;

/// Prototype shared by fragmentation shrapnel; these never get a key
pub const SHRAPNEL_PROTO_ID: &str = "5943d9c186f7745a13413ac9";

/// Whether an item takes part in key generation at all.
///
/// Category nodes and shrapnel are excluded outright.
pub fn is_eligible(item: &TemplateItem) -> bool {
    if !item.is_item() {
        return false;
    }

    item.proto.as_deref() != Some(SHRAPNEL_PROTO_ID)
}
