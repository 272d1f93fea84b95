//! Typed models

mod column;
mod record;
mod record_serde;
pub mod types;
mod value;

pub use column::*;
pub use record::*;
pub use value::*;
