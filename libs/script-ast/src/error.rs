//! # Tree Construction Errors
//!
//! Error types raised synchronously by node constructors and setters.

use thiserror::Error;

/// Errors that can occur while building or mutating statement nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    /// A required child was absent.
    #[error("Invalid argument: `{field}` must not be absent")]
    InvalidArgument {
        /// Name of the slot that was left empty.
        field: &'static str,
    },
}

impl AstError {
    pub(crate) fn missing(field: &'static str) -> Self {
        AstError::InvalidArgument { field }
    }
}

// =============================================================================
// TESTS
// =============================================================================
