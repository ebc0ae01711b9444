/// Core Module for rowlite
///
/// This module contains the fundamental components of the crate: the
/// database access layer and the shared error type used across it.

pub mod db;
pub mod error;

// Re-export commonly used types for convenience
pub use error::{AccessError, Result};
