//! Single-column sorting.

use std::cmp::Ordering;
use std::str::FromStr;

use log::{debug, warn};
use serde::Deserialize;
use serde::Serialize;

use super::ListState;
use crate::error::ListError;
use crate::model::{ColumnKind, Record, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9, oldest first).
    #[serde(rename = "asc")]
    Ascending,
    /// Descending order (Z-A, 9-0, newest first).
    #[serde(rename = "desc")]
    Descending,
}

impl Direction {
    /// Human label for the direction.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Ascending => "Ascending",
            Direction::Descending => "Descending",
        }
    }

    /// The opposite direction.
    pub fn toggle(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Orients an ascending comparison result for this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for Direction {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            _ => Err(ListError::InvalidDirection(s.to_string())),
        }
    }
}

/// The active (field, direction) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub direction: Direction,
}

impl SortState {
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// Three-way comparison of two field values in ascending order.
///
/// Missing fields and nulls compare less than any defined value and equal to
/// each other, so they lead an ascending sort and trail a descending one.
/// Integers compare exactly, mixed numbers as `f64`. Values of different
/// kinds order by kind: bool < number < string < date-time < record < json.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare_defined(a, b),
    }
}

fn compare_defined(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::DateTime(x), Value::DateTime(y)) => x.cmp(y),
        (Value::Record(x), Value::Record(y)) => x.name().cmp(&y.name()),
        (Value::Json(x), Value::Json(y)) => x.to_string().cmp(&y.to_string()),
        _ => match (integer(a), integer(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => kind_rank(a).cmp(&kind_rank(b)),
            },
        },
    }
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Int(n) => Some(i64::from(*n)),
        Value::Long(n) => Some(*n),
        _ => None,
    }
}

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Long(_) | Value::Float(_) => 2,
        Value::String(_) => 3,
        Value::DateTime(_) => 4,
        Value::Record(_) => 5,
        Value::Json(_) => 6,
    }
}

impl ListState {
    /// Returns the active sort, if any.
    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Sorts the full dataset by a sortable column.
    ///
    /// The sort is stable, so rows with equal keys keep their previous
    /// relative order. The window keeps its current size and is re-derived
    /// from the re-sorted rows. Unknown or unsortable fields are rejected
    /// with the state untouched.
    pub fn set_sort(&mut self, field: &str, direction: Direction) -> Result<(), ListError> {
        let column = match self.column(field) {
            Some(column) => column,
            None => {
                warn!("sort rejected: unknown field '{}'", field);
                return Err(ListError::unknown_column(field));
            }
        };
        if !column.sortable {
            warn!("sort rejected: field '{}' is not sortable", field);
            return Err(ListError::not_sortable(field));
        }

        let sort = SortState::new(field, direction);
        self.transition(|state| {
            state.apply_sort(sort);
            state.clamp_display_size();
        });
        debug!(
            "sorted {} rows by {} {}",
            self.all_rows.len(),
            field,
            direction.label()
        );
        Ok(())
    }

    /// Returns "Sorted by {label} ({direction})" for the active sort.
    pub fn current_sort_description(&self) -> Option<String> {
        let sort = self.sort.as_ref()?;
        let label = self
            .column(&sort.field)
            .map(|c| c.label.as_str())
            .unwrap_or(sort.field.as_str());
        Some(format!("Sorted by {} ({})", label, sort.direction.label()))
    }

    /// Re-sorts every row and records the sort as active.
    pub(super) fn apply_sort(&mut self, sort: SortState) {
        let field = sort.field.as_str();
        let dates = self
            .column(field)
            .is_some_and(|c| c.kind == ColumnKind::Date);
        if dates {
            self.all_rows.sort_by(|a, b| {
                let (a, b) = (date_key(a, field), date_key(b, field));
                sort.direction.apply(compare_values(a.as_ref(), b.as_ref()))
            });
        } else {
            self.all_rows
                .sort_by(|a, b| sort.direction.apply(compare_values(a.get(field), b.get(field))));
        }
        self.sort = Some(sort);
    }
}

/// Date cells arrive as host strings; compare them as timestamps.
fn date_key(row: &Record, field: &str) -> Option<Value> {
    let value = row.get(field)?;
    Some(value.as_datetime().map_or_else(|| value.clone(), Value::DateTime))
}
