//! Compact related list.

use std::time::Instant;

use log::{debug, error};

use super::loading::LoadingIndicator;
use super::navigation::{Navigation, ViewAllTarget};
use crate::config::ListConfig;
use crate::error::{ConfigError, NavigationError, SourceError};
use crate::list::{Decoration, compact_count};
use crate::model::{Column, Record};
use crate::source::{DataSource, ObjectInfo, SourceResponse};

/// Related list embedded in a parent record page.
///
/// Shows at most `compact_max_rows` rows of the data source's snapshot and
/// links to the full page for the rest. No sorting, no paging.
#[derive(Debug, Clone)]
pub struct CompactListView {
    record_id: String,
    columns: Vec<Column>,
    decoration: Decoration,
    max_rows: usize,
    rows: Vec<Record>,
    has_more: bool,
    info: ObjectInfo,
    has_access: bool,
    loading: bool,
    indicator: LoadingIndicator,
}

impl CompactListView {
    /// Creates a view for the logs related to `record_id`.
    ///
    /// The view starts out loading until the first response arrives, and
    /// shows no rows until access is granted by [`connect`](Self::connect)
    /// or [`set_access`](Self::set_access).
    pub fn new(
        record_id: impl Into<String>,
        columns: Vec<Column>,
        config: &ListConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut indicator = LoadingIndicator::new(config.spinner_hide_delay);
        indicator.show();
        Ok(Self {
            record_id: record_id.into(),
            columns,
            decoration: config.decoration.clone(),
            max_rows: config.compact_max_rows,
            rows: Vec::new(),
            has_more: false,
            info: ObjectInfo::default(),
            has_access: false,
            loading: true,
            indicator,
        })
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Decorates the snapshot and keeps the first `max_rows` rows.
    pub fn set_rows(&mut self, rows: &[Record]) {
        self.has_more = rows.len() > self.max_rows;
        let shown = &rows[..rows.len().min(self.max_rows)];
        self.rows = self.decoration.decorate(shown);
        debug!(
            "compact list: showing {} of {} rows",
            self.rows.len(),
            rows.len()
        );
    }

    /// Applies a data-source response.
    ///
    /// Errors are logged and returned; the previous rows stay on screen.
    pub fn apply_response(&mut self, response: SourceResponse) -> Result<(), SourceError> {
        let result = match response {
            Ok(rows) => {
                self.set_rows(&rows);
                Ok(())
            }
            Err(e) => {
                error!("compact list {}: {}", self.record_id, e);
                Err(e)
            }
        };
        self.finish_loading();
        result
    }

    /// Loads access, object metadata and rows from `source`.
    pub async fn connect(&mut self, source: &dyn DataSource) -> Result<(), SourceError> {
        self.has_access = source.has_access().await;
        self.info = source.object_info().await;
        self.refresh(source).await
    }

    /// Re-fetches rows from `source`.
    pub async fn refresh(&mut self, source: &dyn DataSource) -> Result<(), SourceError> {
        self.loading = true;
        self.indicator.show();
        let response = source.fetch(&self.record_id).await;
        self.apply_response(response)
    }

    fn finish_loading(&mut self) {
        self.loading = false;
        self.indicator.hide(Instant::now());
    }

    // -------------------------------------------------------------------------
    // Presentation
    // -------------------------------------------------------------------------

    /// Rows to render, already truncated and decorated.
    ///
    /// Empty while the user lacks access, whatever the source returned.
    pub fn rows(&self) -> &[Record] {
        if self.has_access { self.rows.as_slice() } else { &[] }
    }

    /// Returns `true` if there is at least one row to render.
    pub fn has_rows(&self) -> bool {
        !self.rows().is_empty()
    }

    /// Returns `true` if the snapshot had more rows than are shown.
    pub fn has_more(&self) -> bool {
        self.has_access && self.has_more
    }

    /// Columns flagged for the related list.
    pub fn columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|c| c.include_in_related_list)
            .collect()
    }

    /// The object's plural label, or empty while unknown.
    pub fn title(&self) -> &str {
        &self.info.label_plural
    }

    /// Sets the object metadata used for the title and view-all payload.
    pub fn set_object_info(&mut self, info: ObjectInfo) {
        self.info = info;
    }

    /// `"{title} ({count})"`, with `"+"` appended when rows were cut off.
    pub fn header(&self) -> String {
        format!(
            "{} ({})",
            self.title(),
            compact_count(self.rows().len(), self.has_more())
        )
    }

    /// Returns `true` if the user may see the list.
    pub fn has_view_access(&self) -> bool {
        self.has_access
    }

    /// Sets whether the user may see the list.
    pub fn set_access(&mut self, has_access: bool) {
        self.has_access = has_access;
    }

    /// Returns `true` while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns `true` if the spinner should be drawn at `now`.
    pub fn spinner_visible(&self, now: Instant) -> bool {
        self.indicator.is_visible(now)
    }

    /// The full-page target for "view all", carrying every column.
    pub fn view_all_target(&self) -> ViewAllTarget {
        ViewAllTarget::new(
            self.columns.clone(),
            self.info.api_name.clone(),
            self.record_id.clone(),
        )
    }

    /// Navigation request for "view all".
    pub fn view_all(&self, is_console: bool) -> Result<Navigation, NavigationError> {
        self.view_all_target().navigation(self.title(), is_console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemorySource;

    fn rows(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::with_id("Log__c", format!("a{}", i)))
            .collect()
    }

    fn view() -> CompactListView {
        let mut view =
            CompactListView::new("001A", Column::log_columns(), &ListConfig::default()).unwrap();
        view.set_object_info(ObjectInfo::log());
        view.set_access(true);
        view
    }

    #[test]
    fn test_starts_loading() {
        let view = view();
        assert!(view.is_loading());
        assert!(view.spinner_visible(Instant::now()));
        assert_eq!(view.header(), "Logs (0)");
    }

    #[test]
    fn test_truncates_to_max_rows() {
        let mut view = view();
        view.apply_response(Ok(rows(9))).unwrap();

        assert_eq!(view.rows().len(), 6);
        assert!(view.has_more());
        assert_eq!(view.header(), "Logs (6+)");
        assert!(!view.is_loading());
    }

    #[test]
    fn test_exact_count_when_not_truncated() {
        let mut view = view();
        view.apply_response(Ok(rows(6))).unwrap();
        assert!(!view.has_more());
        assert_eq!(view.header(), "Logs (6)");
    }

    #[test]
    fn test_rows_are_decorated() {
        let mut view = view();
        view.apply_response(Ok(rows(1))).unwrap();
        assert_eq!(view.rows()[0].get_string("LogUrl").unwrap(), Some("/a0"));
    }

    #[test]
    fn test_error_keeps_previous_rows() {
        let mut view = view();
        view.apply_response(Ok(rows(3))).unwrap();
        let result = view.apply_response(Err(SourceError::unavailable("offline")));

        assert!(result.is_err());
        assert_eq!(view.rows().len(), 3);
        assert!(!view.is_loading());
    }

    #[test]
    fn test_only_related_list_columns() {
        let view = view();
        assert_eq!(view.columns().len(), 4);
        assert_eq!(view.view_all_target().attributes.columns.len(), 6);
    }

    #[test]
    fn test_rows_hidden_without_access() {
        let mut view = view();
        view.apply_response(Ok(rows(9))).unwrap();
        view.set_access(false);

        assert!(view.rows().is_empty());
        assert!(!view.has_rows());
        assert!(!view.has_more());
        assert_eq!(view.header(), "Logs (0)");
    }

    #[tokio::test]
    async fn test_connect_reads_access_and_title() {
        let source = InMemorySource::new();
        source.set_rows("001A", rows(2));
        let mut view =
            CompactListView::new("001A", Column::log_columns(), &ListConfig::default()).unwrap();

        view.connect(&source).await.unwrap();
        assert!(view.has_view_access());
        assert_eq!(view.header(), "Logs (2)");
        assert_eq!(view.view_all_target().attributes.object_api_name, "Log__c");
    }
}
