//! Plain-text rendering of the list views.

use std::fmt::Write;

use loglist_lib::model::{Column, Record};
use loglist_lib::view::Navigation;
use loglist_lib::{CompactListView, PagedListView};

/// Widest a column may get before cells are cut.
const MAX_CELL_WIDTH: usize = 40;
const COLUMN_GAP: &str = "  ";

/// Renders the related list: header, rows and the view-all hint.
pub fn compact(view: &CompactListView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.header());
    if !view.has_view_access() {
        out.push_str("(no access to logs)\n");
        return out;
    }
    if view.has_rows() {
        out.push_str(&table(&view.columns(), view.rows()));
    } else {
        out.push_str("(no logs)\n");
    }
    if view.has_more() {
        out.push_str("-- 'view-all' to see every log --\n");
    }
    out
}

/// The navigation request handed to the host, as one JSON line.
pub fn navigation(navigation: &Navigation) -> Result<String, serde_json::Error> {
    serde_json::to_string(navigation)
}

/// Renders the full page: header, subtitle, rows and the load-more hint.
pub fn page(view: &PagedListView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.header());
    if !view.has_view_access() {
        out.push_str("(no access to logs)\n");
        return out;
    }
    let _ = writeln!(out, "{}", view.subtitle());
    let columns: Vec<&Column> = view.columns().iter().collect();
    out.push_str(&table(&columns, view.visible_window()));
    if view.can_load_more() {
        out.push_str("-- 'more' to load more --\n");
    }
    out
}

/// Lays rows out in aligned columns under their labels.
pub fn table(columns: &[&Column], rows: &[Record]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|c| clip(&c.format_cell(row))).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            cells
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(c.label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let labels: Vec<String> = columns.iter().map(|c| c.label.clone()).collect();
    push_line(&mut out, &labels, &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Cuts a cell to MAX_CELL_WIDTH characters and flattens newlines.
fn clip(cell: &str) -> String {
    let flat = cell.replace(['\r', '\n'], " ");
    if flat.chars().count() <= MAX_CELL_WIDTH {
        return flat;
    }
    let mut clipped: String = flat.chars().take(MAX_CELL_WIDTH - 1).collect();
    clipped.push('…');
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_aligns_columns() {
        let columns = [Column::new("Level__c", "Level"), Column::new("Body__c", "Body")];
        let refs: Vec<&Column> = columns.iter().collect();
        let rows = vec![
            Record::new("Log__c").set("Level__c", "ERROR").set("Body__c", "boom"),
            Record::new("Log__c").set("Level__c", "INFO"),
        ];

        assert_eq!(
            table(&refs, &rows),
            "Level  Body\nERROR  boom\nINFO\n"
        );
    }

    #[test]
    fn test_navigation_line_is_host_json() {
        let request = Navigation::WebPage {
            url: "/one/one.app#e30=".to_string(),
        };
        assert_eq!(
            navigation(&request).unwrap(),
            r#"{"type":"standard__webPage","url":"/one/one.app#e30="}"#
        );
    }

    #[test]
    fn test_clip_long_and_multiline_cells() {
        assert_eq!(clip("a\nb"), "a b");
        let long = "x".repeat(60);
        let clipped = clip(&long);
        assert_eq!(clipped.chars().count(), MAX_CELL_WIDTH);
        assert!(clipped.ends_with('…'));
    }
}
