//! Error types

mod config;
mod field;
mod list;
mod navigation;
mod source;

pub use config::*;
pub use field::*;
pub use list::*;
pub use navigation::*;
pub use source::*;
