//! Store error types

use thiserror::Error;

/// Errors reported by backend stores
///
/// Backends are opaque: the panel does not branch on failure details beyond
/// "missing" versus "refused", so the variants stay coarse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("backend rejected the request: {0}")]
    Rejected(String),
}

impl StoreError {
    /// Shorthand for a missing record
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Shorthand for a refused request
    pub fn rejected(reason: impl Into<String>) -> Self {
        StoreError::Rejected(reason.into())
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
