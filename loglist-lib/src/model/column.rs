//! Column descriptors for list display.

use serde::Deserialize;
use serde::Serialize;

use super::Record;
use crate::list::Direction;

/// Display format of a date column: 2-digit day, month, year, hour and minute.
const DATE_FORMAT: &str = "%m/%d/%y, %I:%M %p";

/// How a column renders its cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColumnKind {
    /// Plain text of the field value.
    #[default]
    Text,
    /// A link: the field holds the target, `label_field` holds the link text.
    Url {
        #[serde(rename = "labelField")]
        label_field: String,
    },
    /// A date-time shown in a short 2-digit format.
    Date,
}

/// Column configuration.
///
/// Columns are plain data handed to the list: which record field they show,
/// the header label, and whether the column may be sorted.
///
/// # Examples
///
/// ```
/// use loglist_lib::model::Column;
/// use loglist_lib::Direction;
///
/// let columns = vec![
///     Column::new("Level__c", "Level").sortable().in_related_list(),
///     Column::date("LoggedAt__c", "Logged At")
///         .sortable()
///         .default_sort(Direction::Descending),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Column header text.
    pub label: String,
    /// Record field the column reads.
    pub field_name: String,
    /// Cell rendering.
    #[serde(flatten)]
    pub kind: ColumnKind,
    /// Whether the list may be sorted by this column.
    #[serde(default)]
    pub sortable: bool,
    /// Sort applied when the list is (re)initialized. First marked column wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<Direction>,
    /// Whether the compact related list shows this column.
    #[serde(default)]
    pub include_in_related_list: bool,
}

impl Column {
    /// Create a plain text column.
    pub fn new(field_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            field_name: field_name.into(),
            kind: ColumnKind::Text,
            sortable: false,
            default_sort: None,
            include_in_related_list: false,
        }
    }

    /// Create a link column whose text comes from `label_field`.
    pub fn url(
        field_name: impl Into<String>,
        label: impl Into<String>,
        label_field: impl Into<String>,
    ) -> Self {
        Self {
            kind: ColumnKind::Url {
                label_field: label_field.into(),
            },
            ..Self::new(field_name, label)
        }
    }

    /// Create a date-time column.
    pub fn date(field_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: ColumnKind::Date,
            ..Self::new(field_name, label)
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Mark the column as the default sort.
    pub fn default_sort(mut self, direction: Direction) -> Self {
        self.default_sort = Some(direction);
        self
    }

    /// Show the column in the compact related list.
    pub fn in_related_list(mut self) -> Self {
        self.include_in_related_list = true;
        self
    }

    /// Renders the cell text for a record.
    ///
    /// Missing and null values render as an empty string.
    pub fn format_cell(&self, record: &Record) -> String {
        let field = match &self.kind {
            ColumnKind::Url { label_field } => label_field,
            ColumnKind::Text | ColumnKind::Date => &self.field_name,
        };
        let Some(value) = record.get(field) else {
            return String::new();
        };
        let date = match self.kind {
            ColumnKind::Date => value.as_datetime(),
            _ => None,
        };
        match date {
            Some(dt) => dt.format(DATE_FORMAT).to_string(),
            None => value.to_string(),
        }
    }

    /// The stock columns of the log list.
    ///
    /// Log number, body, level and logged-at appear in the related list;
    /// context and logged-by only on the full page.
    pub fn log_columns() -> Vec<Column> {
        vec![
            Column::url(LOG_URL_FIELD, "Log Number", "Name")
                .sortable()
                .in_related_list(),
            Column::new("Body__c", "Body").in_related_list(),
            Column::new("Level__c", "Level").sortable().in_related_list(),
            Column::new("Context__c", "Context"),
            Column::url(LOGGED_BY_URL_FIELD, "Logged By", LOGGED_BY_NAME_FIELD).sortable(),
            Column::date("LoggedAt__c", "Logged At")
                .sortable()
                .in_related_list(),
        ]
    }
}

/// Derived field holding the detail link of a log record.
pub const LOG_URL_FIELD: &str = "LogUrl";
/// Derived field holding the display name of the logging user.
pub const LOGGED_BY_NAME_FIELD: &str = "LoggedByName";
/// Derived field holding the detail link of the logging user.
pub const LOGGED_BY_URL_FIELD: &str = "LoggedByUrl";

/// Finds the first column flagged as default sort.
pub fn default_sort_column(columns: &[Column]) -> Option<(&Column, Direction)> {
    columns
        .iter()
        .find_map(|c| c.default_sort.map(|direction| (c, direction)))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;
    use crate::model::Value;

    #[test]
    fn test_url_column_shows_label_field() {
        let column = Column::url("LogUrl", "Log Number", "Name");
        let record = Record::with_id("Log__c", "a01")
            .set("LogUrl", "/a01")
            .set("Name", "LOG-0001");
        assert_eq!(column.format_cell(&record), "LOG-0001");
    }

    #[test]
    fn test_date_column_uses_two_digit_format() {
        let column = Column::date("LoggedAt__c", "Logged At");
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 14, 5, 0).unwrap();
        let record = Record::new("Log__c").set("LoggedAt__c", at);
        assert_eq!(column.format_cell(&record), "03/01/24, 02:05 PM");

        let from_host = Record::new("Log__c").set("LoggedAt__c", "2024-03-01T14:05:00.000+0000");
        assert_eq!(column.format_cell(&from_host), "03/01/24, 02:05 PM");
    }

    #[test]
    fn test_missing_and_null_cells_are_empty() {
        let column = Column::new("Context__c", "Context");
        assert_eq!(column.format_cell(&Record::new("Log__c")), "");
        let record = Record::new("Log__c").set("Context__c", Value::Null);
        assert_eq!(column.format_cell(&record), "");
    }

    #[test]
    fn test_first_default_sort_column_wins() {
        let columns = vec![
            Column::new("A", "A"),
            Column::new("B", "B").sortable().default_sort(Direction::Descending),
            Column::new("C", "C").sortable().default_sort(Direction::Ascending),
        ];
        let (column, direction) = default_sort_column(&columns).unwrap();
        assert_eq!(column.field_name, "B");
        assert_eq!(direction, Direction::Descending);
    }

    #[test]
    fn test_related_list_subset_of_log_columns() {
        let labels: Vec<_> = Column::log_columns()
            .into_iter()
            .filter(|c| c.include_in_related_list)
            .map(|c| c.label)
            .collect();
        assert_eq!(labels, ["Log Number", "Body", "Level", "Logged At"]);
    }

    #[test]
    fn test_column_serializes_host_shape() {
        let column = Column::url("LogUrl", "Log Number", "Name").in_related_list();
        let json = serde_json::to_value(&column).unwrap();
        assert_eq!(json["type"], "url");
        assert_eq!(json["labelField"], "Name");
        assert_eq!(json["fieldName"], "LogUrl");
        assert_eq!(json["includeInRelatedList"], true);
    }
}
