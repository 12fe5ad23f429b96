//! Error types for reconciliation
//!
//! Only structural problems with the caller's input are errors. A change
//! record that cannot be placed in the document is reported through
//! [`crate::Reconciliation::dropped`] instead.

use thiserror::Error;

/// Errors raised for structurally invalid input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// A change record has an empty revised fragment
    #[error("change record {index} has an empty revised fragment")]
    EmptyFragment {
        /// Position of the record in the caller's list
        index: usize,
    },

    /// A job description could not be decoded
    #[error("invalid job: {0}")]
    InvalidJob(String),
}

/// Result type for reconciliation operations
pub type Result<T> = std::result::Result<T, ReconcileError>;
