//! Data source reading a JSON snapshot from disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;

use super::DataSource;
use super::SourceResponse;
use crate::error::SourceError;
use crate::model::Record;

/// Serves rows from a JSON file holding an array of records.
///
/// The file is re-read on every fetch, so a refresh picks up edits. When a
/// parent field is set, only rows whose parent field equals the requested
/// record id are returned.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    parent_field: Option<String>,
}

impl JsonFileSource {
    /// Creates a source over `path`, returning every row for any record id.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            parent_field: None,
        }
    }

    /// Only return rows whose `field` equals the requested record id.
    pub fn with_parent_field(mut self, field: impl Into<String>) -> Self {
        self.parent_field = Some(field.into());
        self
    }

    /// Returns the snapshot path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DataSource for JsonFileSource {
    async fn fetch(&self, record_id: &str) -> SourceResponse {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        let rows: Vec<Record> = serde_json::from_str(&text)?;
        debug!("read {} rows from {}", rows.len(), self.path.display());

        Ok(match &self.parent_field {
            Some(field) => rows
                .into_iter()
                .filter(|r| r.get_string(field).ok().flatten() == Some(record_id))
                .collect(),
            None => rows,
        })
    }
}
