/// Error Module
///
/// Defines the error type for all database access operations. Every failure
/// surfaces to the caller as one of four distinguishable kinds; no operation
/// ever logs a failure and returns an empty result in its place.
use thiserror::Error;

/// Error type covering the four failure classes of the access layer:
/// - Connection: opening, closing, or using the underlying connection
/// - Query: statement preparation or a placeholder/parameter-count mismatch
/// - Binding: a parameter value could not be bound at its position
/// - Execution: the database rejected or failed the statement mid-run
#[derive(Error, Debug)]
pub enum AccessError {
    /// Failure to establish, use, or release the underlying connection
    #[error("Connection error: {0}")]
    Connection(#[source] rusqlite::Error),

    /// Malformed query text or a placeholder/parameter-count mismatch
    #[error("Query error: {0}")]
    Query(String),

    /// A parameter value incompatible with its positional slot
    #[error("Binding error: {0}")]
    Binding(String),

    /// The database rejected or failed the statement during execution
    #[error("Execution error: {0}")]
    Execution(#[source] rusqlite::Error),
}

/// Type alias for Result to use AccessError as the error type.
pub type Result<T> = std::result::Result<T, AccessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let conn_err = AccessError::Connection(rusqlite::Error::ExecuteReturnedResults);
        assert!(conn_err.to_string().contains("Connection error"));

        let query_err = AccessError::Query("expected 2 placeholders, got 3 parameters".to_string());
        assert!(query_err.to_string().contains("Query error"));

        let bind_err = AccessError::Binding("parameter 1".to_string());
        assert!(bind_err.to_string().contains("Binding error"));

        let exec_err = AccessError::Execution(rusqlite::Error::ExecuteReturnedResults);
        assert!(exec_err.to_string().contains("Execution error"));
    }

    #[test]
    fn test_error_variants_are_distinguishable() {
        let errors = [
            AccessError::Connection(rusqlite::Error::InvalidQuery),
            AccessError::Query("q".to_string()),
            AccessError::Binding("b".to_string()),
            AccessError::Execution(rusqlite::Error::InvalidQuery),
        ];
        let rendered: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        for (i, a) in rendered.iter().enumerate() {
            for b in rendered.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
