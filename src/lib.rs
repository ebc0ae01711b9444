// Core infrastructure modules
pub mod core;

// Re-export the commonly used types at the crate root
pub use crate::core::db::accessor::RowAccessor;
pub use crate::core::db::value::{Param, Row, Value};
pub use crate::core::{AccessError, Result};
