//! Error types for list operations.

use thiserror::Error;

/// Error returned by bounds-checked list operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("StringList::{op} index out of bounds: {index} (len is {len})")]
    IndexOutOfRange {
        op: &'static str,
        index: usize,
        len: usize,
    },
}

/// Result type for list operations.
pub type Result<T> = std::result::Result<T, ListError>;
