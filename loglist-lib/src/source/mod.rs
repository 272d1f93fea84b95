//! Data sources
//!
//! A [`DataSource`] supplies the raw log rows related to a parent record.
//! The views never fetch on their own; the host hands them a source and
//! the views apply whatever it returns.

mod json_file;
mod memory;

pub use json_file::*;
pub use memory::*;

use async_trait::async_trait;

use crate::error::SourceError;
use crate::model::Record;

/// Result of a fetch, as delivered to the views.
pub type SourceResponse = Result<Vec<Record>, SourceError>;

/// Display metadata of the listed object type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectInfo {
    /// API name of the object (e.g. "Log__c").
    pub api_name: String,
    /// Singular label.
    pub label: String,
    /// Plural label, used as the list title.
    pub label_plural: String,
}

impl ObjectInfo {
    /// Creates object metadata.
    pub fn new(
        api_name: impl Into<String>,
        label: impl Into<String>,
        label_plural: impl Into<String>,
    ) -> Self {
        Self {
            api_name: api_name.into(),
            label: label.into(),
            label_plural: label_plural.into(),
        }
    }

    /// Metadata of the log object.
    pub fn log() -> Self {
        Self::new("Log__c", "Log", "Logs")
    }
}

/// Trait for providers of log rows.
///
/// Implementations must be cheap to call repeatedly: every refresh fetches
/// the full row set again.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches the rows related to `record_id`.
    async fn fetch(&self, record_id: &str) -> SourceResponse;

    /// Returns `true` if the current user may read the rows.
    async fn has_access(&self) -> bool {
        true
    }

    /// Returns display metadata of the listed object.
    async fn object_info(&self) -> ObjectInfo {
        ObjectInfo::log()
    }
}
