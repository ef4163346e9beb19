//! # Fold Errors
//!
//! Failures raised while folding a sequence.

use thiserror::Error;

/// Error from a fallible fold
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoldError {
    /// The combining function rejected an element
    ///
    /// `index` is the zero-based position of the element being combined
    /// when the failure happened. The partial accumulator is discarded.
    #[error("invalid operation at element {index}: {reason}")]
    InvalidOperation { index: usize, reason: String },
}

impl FoldError {
    /// Position of the element that failed
    pub fn index(&self) -> usize {
        match self {
            FoldError::InvalidOperation { index, .. } => *index,
        }
    }
}

/// Result type for fallible folds
pub type FoldResult<A> = Result<A, FoldError>;
