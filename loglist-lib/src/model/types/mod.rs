//! Record data types

mod entity_ref;

pub use entity_ref::*;
