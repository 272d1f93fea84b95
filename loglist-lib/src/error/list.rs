//! Errors raised by list state transitions

/// Why a sort request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortRejection {
    /// No column reads the requested field.
    UnknownColumn,
    /// The column exists but is not marked sortable.
    NotSortable,
}

impl std::fmt::Display for SortRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownColumn => f.write_str("no such column"),
            Self::NotSortable => f.write_str("column is not sortable"),
        }
    }
}

/// A rejected list operation.
///
/// Every variant is recoverable: the list state is left exactly as it was
/// before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The sort field is unknown or not sortable.
    #[error("Cannot sort by '{field}': {reason}")]
    InvalidSortField {
        field: String,
        reason: SortRejection,
    },

    /// The host sent a sort direction string we don't recognize.
    #[error("Unknown sort direction '{0}'")]
    InvalidDirection(String),
}

impl ListError {
    /// Creates an unknown-column sort error.
    pub fn unknown_column(field: impl Into<String>) -> Self {
        Self::InvalidSortField {
            field: field.into(),
            reason: SortRejection::UnknownColumn,
        }
    }

    /// Creates a not-sortable sort error.
    pub fn not_sortable(field: impl Into<String>) -> Self {
        Self::InvalidSortField {
            field: field.into(),
            reason: SortRejection::NotSortable,
        }
    }

    /// Returns the field name the rejected sort referred to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidSortField { field, .. } => Some(field),
            Self::InvalidDirection(_) => None,
        }
    }
}
