//! Full-page list with incremental loading and sorting.

use std::collections::VecDeque;
use std::time::Instant;

use log::{debug, error, warn};

use super::intent::{Dispatch, Intent, SortEvent};
use super::loading::LoadingIndicator;
use super::navigation::ViewAllTarget;
use crate::config::ListConfig;
use crate::error::{ConfigError, ListError, SourceError};
use crate::list::ListState;
use crate::model::{Column, Record};
use crate::source::{DataSource, SourceResponse};

/// The full "view all" page.
///
/// Owns a [`ListState`] and serializes intents against it: while a refresh
/// is in flight, load-more, sort and refresh intents are queued and replayed
/// in arrival order once the new snapshot is in place. A queued refresh
/// pauses the replay; the intents behind it wait for that refresh too.
#[derive(Debug, Clone)]
pub struct PagedListView {
    record_id: String,
    object_api_name: String,
    title: String,
    state: ListState,
    pending: VecDeque<Intent>,
    has_access: bool,
    indicator: LoadingIndicator,
}

impl PagedListView {
    /// Creates an empty page for the logs related to `record_id`.
    pub fn new(
        record_id: impl Into<String>,
        object_api_name: impl Into<String>,
        columns: Vec<Column>,
        config: &ListConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            record_id: record_id.into(),
            object_api_name: object_api_name.into(),
            title: String::new(),
            state: ListState::new(columns, config)?,
            pending: VecDeque::new(),
            has_access: true,
            indicator: LoadingIndicator::new(config.spinner_hide_delay),
        })
    }

    /// Creates the page a compact list's "view all" points at.
    pub fn from_target(target: &ViewAllTarget, config: &ListConfig) -> Result<Self, ConfigError> {
        let attributes = &target.attributes;
        Self::new(
            attributes.record_id.clone(),
            attributes.object_api_name.clone(),
            attributes.columns.clone(),
            config,
        )
    }

    /// Sets the page title (the object's plural label).
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    // -------------------------------------------------------------------------
    // Refresh
    // -------------------------------------------------------------------------

    /// Marks a fetch as started. Intents dispatched from now on are queued.
    pub fn begin_refresh(&mut self) {
        self.state.set_loading(true);
        self.indicator.show();
        debug!("paged list {}: refresh started", self.record_id);
    }

    /// Applies the fetch result and replays queued intents.
    ///
    /// On success the state is replaced wholesale. On error the error is
    /// logged and returned, and the previous rows stay in place. Queued
    /// intents run in both cases, up to the first queued refresh: that one
    /// starts a new fetch, so [`is_loading`](Self::is_loading) is still
    /// `true` afterwards and the caller must fetch again.
    pub fn finish_refresh(&mut self, response: SourceResponse) -> Result<(), SourceError> {
        let result = match response {
            Ok(rows) => {
                self.state.initialize(&rows);
                Ok(())
            }
            Err(e) => {
                error!("paged list {}: {}", self.record_id, e);
                Err(e)
            }
        };
        self.state.set_loading(false);
        self.indicator.hide(Instant::now());

        self.replay_pending();
        result
    }

    fn replay_pending(&mut self) {
        while let Some(intent) = self.pending.pop_front() {
            match self.dispatch(intent) {
                Ok(Dispatch::Refreshing) => return,
                Ok(_) => {}
                Err(e) => warn!("paged list {}: queued intent dropped: {}", self.record_id, e),
            }
        }
    }

    /// Fetches a fresh snapshot from `source` and applies it.
    ///
    /// Rows are only fetched if the source grants access. Keeps fetching
    /// while replayed intents request another refresh; the result is that
    /// of the last fetch.
    pub async fn refresh(&mut self, source: &dyn DataSource) -> Result<(), SourceError> {
        self.begin_refresh();
        loop {
            self.has_access = source.has_access().await;
            let response = if self.has_access {
                source.fetch(&self.record_id).await
            } else {
                Err(SourceError::AccessDenied)
            };
            let result = self.finish_refresh(response);
            if !self.state.is_loading() {
                return result;
            }
        }
    }

    /// Applies a response delivered outside of [`refresh`](Self::refresh).
    pub fn apply_response(&mut self, response: SourceResponse) -> Result<(), SourceError> {
        self.finish_refresh(response)
    }

    // -------------------------------------------------------------------------
    // Intents
    // -------------------------------------------------------------------------

    /// Applies an intent now, or queues it while a refresh is in flight.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Dispatch, ListError> {
        match intent {
            Intent::LoadMore => Ok(self.load_more()),
            Intent::Sort(event) => self.sort_changed(event),
            Intent::Refresh => Ok(self.request_refresh()),
        }
    }

    /// Starts a refresh driven by the caller, or queues it behind the one in
    /// flight.
    ///
    /// On [`Dispatch::Refreshing`] the caller fetches and passes the response
    /// to [`finish_refresh`](Self::finish_refresh).
    pub fn request_refresh(&mut self) -> Dispatch {
        if self.state.is_loading() {
            return self.queue(Intent::Refresh);
        }
        self.begin_refresh();
        Dispatch::Refreshing
    }

    /// Grows the visible window.
    pub fn load_more(&mut self) -> Dispatch {
        if self.state.is_loading() {
            return self.queue(Intent::LoadMore);
        }
        self.paced(|state| Dispatch::LoadMore(state.load_more()))
    }

    /// Re-sorts the list after a column header click.
    pub fn sort_changed(&mut self, event: SortEvent) -> Result<Dispatch, ListError> {
        if self.state.is_loading() {
            return Ok(self.queue(Intent::Sort(event)));
        }
        self.paced(|state| {
            state
                .set_sort(&event.field_name, event.sort_direction)
                .map(|()| Dispatch::Sorted)
        })
    }

    /// Number of intents waiting for the current refresh.
    pub fn pending_intents(&self) -> usize {
        self.pending.len()
    }

    fn queue(&mut self, intent: Intent) -> Dispatch {
        debug!("paged list {}: queued {:?}", self.record_id, intent);
        self.pending.push_back(intent);
        Dispatch::Queued
    }

    /// Runs a transition with the spinner shown, scheduling its hide after.
    fn paced<R>(&mut self, transition: impl FnOnce(&mut ListState) -> R) -> R {
        self.indicator.show();
        let result = transition(&mut self.state);
        self.indicator.hide(Instant::now());
        result
    }

    // -------------------------------------------------------------------------
    // Presentation
    // -------------------------------------------------------------------------

    /// The underlying list state.
    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Rows to render. Empty while the user lacks access.
    pub fn visible_window(&self) -> &[Record] {
        if self.has_access {
            self.state.visible_window()
        } else {
            &[]
        }
    }

    /// Returns `true` if the user may see the list.
    pub fn has_view_access(&self) -> bool {
        self.has_access
    }

    /// Sets whether the user may see the list. [`refresh`](Self::refresh)
    /// asks the source on every fetch.
    pub fn set_access(&mut self, has_access: bool) {
        self.has_access = has_access;
    }

    /// Every column, in display order.
    pub fn columns(&self) -> &[Column] {
        self.state.columns()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    pub fn object_api_name(&self) -> &str {
        &self.object_api_name
    }

    /// `"{title} ({count summary})"`.
    pub fn header(&self) -> String {
        self.state.list_header(&self.title)
    }

    /// Count summary and sort description.
    pub fn subtitle(&self) -> String {
        self.state.subtitle()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn is_showing_all(&self) -> bool {
        self.state.is_showing_all()
    }

    /// Returns `true` while "load more" should stay enabled.
    pub fn can_load_more(&self) -> bool {
        self.state.can_load_more()
    }

    /// Returns `true` if the spinner should be drawn at `now`.
    pub fn spinner_visible(&self, now: Instant) -> bool {
        self.indicator.is_visible(now)
    }
}
