//! Log related list library
//!
//! Client-side list state for a paginated, sortable list of log records: the
//! compact related-list view, the full-page view with "load more" and column
//! sorting, and the summary strings both views render.

pub mod config;
pub mod error;
pub mod list;
pub mod model;
pub mod source;
pub mod view;

pub use config::ListConfig;
pub use list::Direction;
pub use list::ListState;
pub use view::CompactListView;
pub use view::PagedListView;
