//! List state machine.
//!
//! [`ListState`] owns the full decorated dataset, the display-size window
//! and the active sort. It moves through these states:
//!
//! - **Idle**: created empty, nothing rendered (`display_size == 0`)
//! - **Loaded**: initialized from a data-source snapshot
//! - **AllShown**: a load-more found nothing left to show (terminal until
//!   the next `initialize`)
//!
//! `loading` is a transient flag raised around every transition, never a
//! state of its own. The behaviour is split across:
//!
//! - `window`: the visible prefix and "load more"
//! - `sort`: the single active sort and value comparison
//! - `summary`: header, count and sort description strings
//! - `decorate`: display-only fields derived from raw rows

mod decorate;
mod sort;
mod summary;
mod window;

pub use decorate::Decoration;
pub use sort::{Direction, SortState, compare_values};
pub use summary::compact_count;
pub use window::LoadMore;

use log::debug;

use crate::config::ListConfig;
use crate::error::ConfigError;
use crate::model::{Column, Record, default_sort_column};

/// Client-side state of a paginated, sortable list.
#[derive(Debug, Clone)]
pub struct ListState {
    /// Column descriptors, used to validate and describe sorts.
    columns: Vec<Column>,
    /// Derived fields added on initialize.
    decoration: Decoration,
    /// Window size after (re)initialization.
    default_display_size: usize,
    /// Rows added per load-more.
    increment: usize,
    /// Full decorated dataset, in the active sort order.
    all_rows: Vec<Record>,
    /// Prefix length exposed as the visible window.
    display_size: usize,
    /// Active sort, `None` keeps data-source order.
    sort: Option<SortState>,
    /// Raised for the duration of a transition or fetch.
    loading: bool,
    /// Set once a load-more found nothing left to show.
    all_shown: bool,
}

impl ListState {
    /// Creates an empty list for the given columns.
    pub fn new(columns: Vec<Column>, config: &ListConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            columns,
            decoration: config.decoration.clone(),
            default_display_size: config.default_display_size,
            increment: config.increment,
            all_rows: Vec::new(),
            display_size: 0,
            sort: None,
            loading: false,
            all_shown: false,
        })
    }

    /// Replaces the dataset wholesale with a fresh snapshot.
    ///
    /// Rows are decorated, the window is reset to the default display size
    /// and the default sort column (if any) is applied. Nothing from the
    /// previous snapshot survives.
    pub fn initialize(&mut self, rows: &[Record]) {
        self.transition(|state| {
            state.all_rows = state.decoration.decorate(rows);
            state.sort = None;
            state.all_shown = false;
            state.display_size = state.default_display_size;

            if let Some((column, direction)) = default_sort_column(&state.columns) {
                let sort = SortState::new(column.field_name.clone(), direction);
                state.apply_sort(sort);
            }
            state.clamp_display_size();
        });
        debug!(
            "list initialized: {} rows, showing {}",
            self.all_rows.len(),
            self.display_size
        );
    }

    /// Returns the column descriptors.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the full dataset in its current order.
    pub fn all_rows(&self) -> &[Record] {
        &self.all_rows
    }

    /// Returns the number of rows in the dataset.
    pub fn len(&self) -> usize {
        self.all_rows.len()
    }

    /// Returns `true` if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.all_rows.is_empty()
    }

    /// Returns `true` while a transition or fetch is in progress.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Raises or clears the loading flag around an external fetch.
    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Finds the column reading `field`.
    pub fn column(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.field_name == field)
    }

    /// Runs a state update with `loading` raised for its duration.
    fn transition<R>(&mut self, update: impl FnOnce(&mut Self) -> R) -> R {
        self.loading = true;
        let result = update(self);
        self.loading = false;
        result
    }
}
