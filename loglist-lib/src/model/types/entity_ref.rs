//! Entity reference type for lookups

use serde::Deserialize;
use serde::Serialize;

/// A reference to a related record, resolved from a lookup relationship.
///
/// Built from a nested relationship object (e.g. `LoggedBy__r`) together
/// with its id field (e.g. `LoggedBy__c`).
///
/// # Example
///
/// ```
/// use loglist_lib::model::types::EntityReference;
///
/// let user = EntityReference::with_name("User", "005000000000001", "Ada Lovelace");
/// assert_eq!(user.url(), "/005000000000001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityReference {
    /// The identifier of the referenced record.
    pub id: String,
    /// The object name of the referenced record (e.g., "User").
    pub object_name: String,
    /// The display name of the referenced record, if available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EntityReference {
    /// Creates a new entity reference.
    pub fn new(object_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            object_name: object_name.into(),
            name: None,
        }
    }

    /// Creates a new entity reference with a display name.
    pub fn with_name(
        object_name: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            object_name: object_name.into(),
            name: Some(name.into()),
        }
    }

    /// Returns the relative detail-page link for the referenced record.
    pub fn url(&self) -> String {
        record_url(&self.id)
    }
}

/// Builds the relative detail-page link for a record id (`/{id}`).
pub fn record_url(id: &str) -> String {
    format!("/{}", id)
}
