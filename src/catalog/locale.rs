use std::collections::HashMap;

/// Localized text fields looked up per item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleField {
    Name,
    ShortName,
}

impl LocaleField {
    pub const fn as_str(self) -> &'static str {
        match self {
            LocaleField::Name => "Name",
            LocaleField::ShortName => "ShortName",
        }
    }
}

/// Read-only access to a flat locale table keyed by `"<item id> <field>"`
pub trait LocaleLookup {
    fn get(&self, key: &str) -> Option<&str>;

    /// Localized `field` of `item_id`. Empty strings count as missing.
    fn item_text(&self, item_id: &str, field: LocaleField) -> Option<&str> {
        self.get(&format!("{} {}", item_id, field.as_str()))
            .filter(|s| !s.is_empty())
    }
}

impl LocaleLookup for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_text() {
        let mut locale = HashMap::new();
        locale.insert("abc ShortName".to_string(), "AK-74".to_string());
        locale.insert("abc Name".to_string(), String::new());

        assert_eq!(locale.item_text("abc", LocaleField::ShortName), Some("AK-74"));
        assert_eq!(locale.item_text("abc", LocaleField::Name), None);
        assert_eq!(locale.item_text("def", LocaleField::ShortName), None);
    }
}
