//! Visible window and incremental loading.

use log::debug;

use super::ListState;
use crate::model::Record;

/// Outcome of a load-more request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMore {
    /// The window grew from `from` to `to` rows.
    Grown { from: usize, to: usize },
    /// Every row was already visible; further requests are disabled.
    AllShown,
}

impl ListState {
    /// Returns the number of rows exposed by the window.
    pub fn display_size(&self) -> usize {
        self.display_size
    }

    /// Returns the visible prefix of the dataset.
    pub fn visible_window(&self) -> &[Record] {
        let end = self.display_size.min(self.all_rows.len());
        &self.all_rows[..end]
    }

    /// Returns `true` if the window covers the whole dataset.
    pub fn is_showing_all(&self) -> bool {
        self.visible_window().len() == self.all_rows.len()
    }

    /// Returns `true` while a load-more could still grow the window.
    pub fn can_load_more(&self) -> bool {
        !self.all_shown && !self.is_showing_all()
    }

    /// Grows the window by the configured increment.
    ///
    /// Once the window already covers every row this is a no-op that puts
    /// the list in its terminal "all shown" state.
    pub fn load_more(&mut self) -> LoadMore {
        if self.display_size >= self.all_rows.len() {
            self.all_shown = true;
            debug!("load more ignored: all {} rows shown", self.all_rows.len());
            return LoadMore::AllShown;
        }

        let from = self.display_size;
        let to = self.transition(|state| {
            state.display_size = (state.display_size + state.increment).min(state.all_rows.len());
            state.display_size
        });
        debug!("load more: window {} -> {}", from, to);
        LoadMore::Grown { from, to }
    }

    /// Keeps the window within the dataset.
    pub(super) fn clamp_display_size(&mut self) {
        self.display_size = self.display_size.min(self.all_rows.len());
    }
}
