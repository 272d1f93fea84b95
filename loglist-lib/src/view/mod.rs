//! List views
//!
//! - [`CompactListView`]: a related list embedded in a parent record page,
//!   capped at a fixed number of rows with a "view all" link
//! - [`PagedListView`]: the full page, with "load more" and column sorting
//!
//! Both consume [`SourceResponse`](crate::source::SourceResponse)s and keep
//! their last good rows when a fetch fails.

mod compact;
mod intent;
mod loading;
mod navigation;
mod paged;

pub use compact::CompactListView;
pub use intent::{Dispatch, Intent, SortEvent};
pub use loading::LoadingIndicator;
pub use navigation::{Navigation, Subtab, VIEW_ALL_COMPONENT, ViewAllAttributes, ViewAllTarget};
pub use paged::PagedListView;
