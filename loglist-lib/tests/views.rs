//! Views driven by a data source.

use loglist_lib::model::{Column, Record};
use async_trait::async_trait;
use loglist_lib::error::SourceError;
use loglist_lib::source::{DataSource, InMemorySource, ObjectInfo, SourceResponse};
use loglist_lib::view::{Dispatch, Navigation, SortEvent, ViewAllTarget};
use loglist_lib::{CompactListView, Direction, ListConfig, PagedListView};

const PARENT: &str = "001000000000001";

fn log_rows(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            Record::with_id("Log__c", format!("a01{:03}", i))
                .set("Name", format!("LOG-{:04}", i))
                .set("Level__c", if i % 2 == 0 { "ERROR" } else { "INFO" })
                .set("LoggedBy__c", "005A")
                .set(
                    "LoggedBy__r",
                    Record::with_id("User", "005A").set("Name", "Ada Lovelace"),
                )
        })
        .collect()
}

fn source(n: usize) -> InMemorySource {
    let source = InMemorySource::new();
    source.set_rows(PARENT, log_rows(n));
    source
}

#[tokio::test]
async fn test_compact_view_all_opens_paged_view() {
    let source = source(9);
    let config = ListConfig::default();

    let mut compact = CompactListView::new(PARENT, Column::log_columns(), &config).unwrap();
    compact.connect(&source).await.unwrap();
    assert_eq!(compact.header(), "Logs (6+)");

    let navigation = compact.view_all(false).unwrap();
    let Navigation::WebPage { url } = navigation else {
        panic!("expected web page navigation");
    };
    let target = ViewAllTarget::from_url(&url).unwrap();

    let mut page = PagedListView::from_target(&target, &config).unwrap();
    page.set_title(source.object_info().await.label_plural);
    page.refresh(&source).await.unwrap();

    assert_eq!(page.header(), "Logs (9)");
    let first = &page.visible_window()[0];
    assert_eq!(first.get_string("LoggedByName").unwrap(), Some("Ada Lovelace"));
    assert_eq!(first.get_string("LoggedByUrl").unwrap(), Some("/005A"));
}

#[tokio::test]
async fn test_paged_refresh_picks_up_new_rows() {
    let source = source(3);
    let config = ListConfig::default().with_default_display_size(2);
    let mut page = PagedListView::new(PARENT, "Log__c", Column::log_columns(), &config).unwrap();
    page.set_title(ObjectInfo::log().label_plural);

    page.refresh(&source).await.unwrap();
    assert_eq!(page.header(), "Logs (2+)");

    page.sort_changed(SortEvent::new("Level__c", Direction::Ascending))
        .unwrap();
    assert_eq!(page.subtitle(), "2+ • Sorted by Level (Ascending)");

    source.set_rows(PARENT, log_rows(1));
    page.refresh(&source).await.unwrap();
    assert_eq!(page.header(), "Logs (1)");
    assert_eq!(page.subtitle(), "1");
}

#[tokio::test]
async fn test_paged_refresh_failure_keeps_rows() {
    let source = source(4);
    let mut page =
        PagedListView::new(PARENT, "Log__c", Column::log_columns(), &ListConfig::default())
            .unwrap();
    page.refresh(&source).await.unwrap();

    source.set_failure(Some("service unavailable".to_string()));
    assert!(page.refresh(&source).await.is_err());
    assert_eq!(page.visible_window().len(), 4);
    assert!(!page.is_loading());
}

#[tokio::test]
async fn test_denied_access_reported_by_compact_view() {
    let source = InMemorySource::new().without_access();
    let mut compact =
        CompactListView::new(PARENT, Column::log_columns(), &ListConfig::default()).unwrap();

    assert!(compact.connect(&source).await.is_err());
    assert!(!compact.has_view_access());
    assert!(!compact.has_rows());
}

#[test]
fn test_unsortable_column_rejected_by_page() {
    let mut page =
        PagedListView::new(PARENT, "Log__c", Column::log_columns(), &ListConfig::default())
            .unwrap();
    page.apply_response(Ok(log_rows(2))).unwrap();

    assert!(page
        .sort_changed(SortEvent::new("Body__c", Direction::Ascending))
        .is_err());
    assert_eq!(
        page.sort_changed(SortEvent::new("LoggedAt__c", Direction::Descending)),
        Ok(Dispatch::Sorted)
    );
}

/// Serves rows even though it reports no access.
struct DeniedButServing(InMemorySource);

#[async_trait]
impl DataSource for DeniedButServing {
    async fn fetch(&self, record_id: &str) -> SourceResponse {
        self.0.fetch(record_id).await
    }

    async fn has_access(&self) -> bool {
        false
    }
}

#[tokio::test]
async fn test_views_hide_rows_when_access_denied() {
    let source = DeniedButServing(source(3));
    let config = ListConfig::default();

    let mut compact = CompactListView::new(PARENT, Column::log_columns(), &config).unwrap();
    compact.connect(&source).await.unwrap();
    assert!(!compact.has_view_access());
    assert!(compact.rows().is_empty());

    let mut page = PagedListView::new(PARENT, "Log__c", Column::log_columns(), &config).unwrap();
    let result = page.refresh(&source).await;
    assert!(matches!(result, Err(SourceError::AccessDenied)));
    assert!(!page.has_view_access());
    assert!(page.visible_window().is_empty());
    assert!(!page.is_loading());
}
