//! In-memory data source using DashMap

use std::sync::Mutex;

use async_trait::async_trait;
use dashmap::DashMap;

use super::DataSource;
use super::ObjectInfo;
use super::SourceResponse;
use crate::error::SourceError;
use crate::model::Record;

/// A data source serving rows from memory, keyed by parent record id.
///
/// Rows can be replaced at any time; the next fetch sees the new rows.
/// A failure can be injected to exercise the views' error path.
///
/// # Example
///
/// ```
/// use loglist_lib::model::Record;
/// use loglist_lib::source::InMemorySource;
///
/// let source = InMemorySource::new();
/// source.set_rows("001A", vec![Record::with_id("Log__c", "a01")]);
/// assert_eq!(source.row_count("001A"), 1);
/// ```
#[derive(Debug)]
pub struct InMemorySource {
    rows: DashMap<String, Vec<Record>>,
    failure: Mutex<Option<String>>,
    access: bool,
    info: ObjectInfo,
}

impl Default for InMemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            failure: Mutex::new(None),
            access: true,
            info: ObjectInfo::log(),
        }
    }

    /// Denies access to the rows.
    pub fn without_access(mut self) -> Self {
        self.access = false;
        self
    }

    /// Sets the object metadata reported by the source.
    pub fn with_object_info(mut self, info: ObjectInfo) -> Self {
        self.info = info;
        self
    }

    /// Replaces the rows related to `record_id`.
    pub fn set_rows(&self, record_id: impl Into<String>, rows: Vec<Record>) {
        self.rows.insert(record_id.into(), rows);
    }

    /// Returns the number of rows related to `record_id`.
    pub fn row_count(&self, record_id: &str) -> usize {
        self.rows.get(record_id).map(|r| r.len()).unwrap_or(0)
    }

    /// Makes every fetch fail with `message` until cleared with `None`.
    pub fn set_failure(&self, message: Option<String>) {
        if let Ok(mut guard) = self.failure.lock() {
            *guard = message;
        }
    }
}

#[async_trait]
impl DataSource for InMemorySource {
    async fn fetch(&self, record_id: &str) -> SourceResponse {
        if !self.access {
            return Err(SourceError::AccessDenied);
        }
        if let Some(message) = self.failure.lock().ok().and_then(|g| g.clone()) {
            return Err(SourceError::unavailable(message));
        }
        Ok(self
            .rows
            .get(record_id)
            .map(|r| r.value().clone())
            .unwrap_or_default())
    }

    async fn has_access(&self) -> bool {
        self.access
    }

    async fn object_info(&self) -> ObjectInfo {
        self.info.clone()
    }
}
