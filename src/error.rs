use thiserror::Error;

/// Catalog inconsistencies that make an item impossible to name.
///
/// The catalog is assumed to be internally consistent, so any of these
/// aborts the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("item {item} references unknown parent {parent}")]
    MissingParent { item: String, parent: String },

    #[error("item {item} references unknown item {referenced}")]
    MissingItem { item: String, referenced: String },

    #[error("item {item} is missing property {property}")]
    MissingProperty {
        item: String,
        property: &'static str,
    },
}

impl DataError {
    pub(crate) fn missing_property(item: &str, property: &'static str) -> Self {
        DataError::MissingProperty {
            item: item.to_string(),
            property,
        }
    }
}
