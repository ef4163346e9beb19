//! # Core
//!
//! Pure fold logic. No I/O.

pub mod error;
pub mod fold;

pub use error::{FoldError, FoldResult};
pub use fold::{fold, fold_traced, reduce, try_fold, FoldStep};
