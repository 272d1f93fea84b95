//! Derived header and subtitle strings.

use super::ListState;

/// Separator between subtitle parts.
const SUBTITLE_SEPARATOR: &str = " • ";

/// Count shown by a list truncated to a fixed number of rows.
///
/// `"{count}+"` when rows were cut off (and some are shown), the bare count
/// otherwise.
pub fn compact_count(shown: usize, truncated: bool) -> String {
    if truncated && shown > 0 {
        format!("{}+", shown)
    } else {
        shown.to_string()
    }
}

impl ListState {
    /// The exact row count when everything is shown, else `"{display_size}+"`.
    pub fn item_count_summary(&self) -> String {
        if self.is_showing_all() {
            self.all_rows.len().to_string()
        } else {
            format!("{}+", self.display_size)
        }
    }

    /// `"{title} ({count summary})"`.
    pub fn list_header(&self, title: &str) -> String {
        format!("{} ({})", title, self.item_count_summary())
    }

    /// Count summary and sort description, joined when both are present.
    pub fn subtitle(&self) -> String {
        [Some(self.item_count_summary()), self.current_sort_description()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(SUBTITLE_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListConfig;
    use crate::list::Direction;
    use crate::model::{Column, Record};

    fn state(rows: usize) -> ListState {
        let config = ListConfig::default()
            .with_default_display_size(5)
            .with_increment(3);
        let columns = vec![Column::date("LoggedAt__c", "Logged At").sortable()];
        let mut state = ListState::new(columns, &config).unwrap();
        let rows: Vec<_> = (0..rows)
            .map(|i| Record::with_id("Log__c", i.to_string()))
            .collect();
        state.initialize(&rows);
        state
    }

    #[test]
    fn test_count_summary_partial_and_complete() {
        let mut state = state(8);
        assert_eq!(state.item_count_summary(), "5+");
        state.load_more();
        assert_eq!(state.item_count_summary(), "8");
    }

    #[test]
    fn test_header() {
        let state = state(8);
        assert_eq!(state.list_header("Logs"), "Logs (5+)");
    }

    #[test]
    fn test_subtitle_with_and_without_sort() {
        let mut state = state(3);
        assert_eq!(state.subtitle(), "3");

        state
            .set_sort("LoggedAt__c", Direction::Descending)
            .unwrap();
        assert_eq!(state.subtitle(), "3 • Sorted by Logged At (Descending)");
    }

    #[test]
    fn test_compact_count() {
        assert_eq!(compact_count(6, true), "6+");
        assert_eq!(compact_count(4, false), "4");
        assert_eq!(compact_count(0, true), "0");
    }
}
