//! Spinner pacing.

use std::time::{Duration, Instant};

/// Visual loading flag with a short linger on hide.
///
/// Showing is immediate. Hiding is scheduled `hide_delay` after the call so
/// a fast refresh still flashes the spinner. This only paces the display;
/// list state transitions complete independently of it.
#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    shown: bool,
    hide_at: Option<Instant>,
    hide_delay: Duration,
}

impl LoadingIndicator {
    /// Creates a hidden indicator.
    pub fn new(hide_delay: Duration) -> Self {
        Self {
            shown: false,
            hide_at: None,
            hide_delay,
        }
    }

    /// Shows the spinner now, cancelling any pending hide.
    pub fn show(&mut self) {
        self.shown = true;
        self.hide_at = None;
    }

    /// Schedules the spinner to hide `hide_delay` after `now`.
    pub fn hide(&mut self, now: Instant) {
        if self.shown {
            self.hide_at = Some(now + self.hide_delay);
        }
    }

    /// Returns `true` if the spinner should be drawn at `now`.
    pub fn is_visible(&self, now: Instant) -> bool {
        match self.hide_at {
            Some(at) => self.shown && now < at,
            None => self.shown,
        }
    }

    /// Returns the instant the pending hide takes effect, if any.
    pub fn hide_at(&self) -> Option<Instant> {
        self.hide_at
    }
}
