//! User intents sent by the host.

use serde::Deserialize;
use serde::Serialize;

use crate::error::ListError;
use crate::list::{Direction, LoadMore};

/// A sort change requested by the host (column header click).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortEvent {
    pub field_name: String,
    pub sort_direction: Direction,
}

impl SortEvent {
    pub fn new(field_name: impl Into<String>, sort_direction: Direction) -> Self {
        Self {
            field_name: field_name.into(),
            sort_direction,
        }
    }

    /// Builds an event from the host's field name and direction string.
    pub fn parse(field_name: impl Into<String>, direction: &str) -> Result<Self, ListError> {
        Ok(Self::new(field_name, direction.parse()?))
    }
}

/// An intent that changes the full-page list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    LoadMore,
    Sort(SortEvent),
    /// Re-fetch from the data source.
    Refresh,
}

/// What happened to a dispatched intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Applied a load-more.
    LoadMore(LoadMore),
    /// Applied a sort.
    Sorted,
    /// A refresh started; the caller fetches and hands the response to
    /// `finish_refresh`.
    Refreshing,
    /// A refresh is in flight; the intent runs once it settles.
    Queued,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_event_from_host_json() {
        let event: SortEvent =
            serde_json::from_str(r#"{"fieldName": "Level__c", "sortDirection": "desc"}"#).unwrap();
        assert_eq!(event, SortEvent::new("Level__c", Direction::Descending));
    }

    #[test]
    fn test_sort_event_parse_rejects_unknown_direction() {
        assert!(SortEvent::parse("Level__c", "up").is_err());
    }
}
