//! # Fold Engine
//!
//! Left folds over an ordered sequence.
//!
//! ```text
//! fold([2, 3, 4], 0, +)
//!
//!   acc = 0
//!   0 + 2 = 2
//!   2 + 3 = 5
//!   5 + 4 = 9   -> 9
//! ```
//!
//! The accumulator is owned by the fold for the whole call and is only ever
//! replaced by the combining function's return value. Elements are visited
//! strictly first to last, so non-associative operations (subtraction,
//! string building) give the expected result.

use std::fmt::Display;

use tracing::{debug, trace};

use super::error::{FoldError, FoldResult};

/// One recorded step of a traced fold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldStep<A, T> {
    /// Zero-based element position
    pub index: usize,

    /// Accumulator before this element
    pub before: A,

    /// The element combined in
    pub element: T,

    /// Accumulator after this element
    pub after: A,
}

/// Fold `sequence` into a single value
///
/// Returns `initial` unchanged when the sequence is empty.
pub fn fold<I, A, F>(sequence: I, initial: A, mut combine: F) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    let mut acc = initial;
    let mut steps = 0usize;

    for (index, element) in sequence.into_iter().enumerate() {
        acc = combine(acc, element);
        trace!(index, "fold step");
        steps = index + 1;
    }

    debug!(steps, "fold complete");
    acc
}

/// Fold with a combining function that may fail
///
/// Stops at the first error. The failing element's index and the error's
/// message are carried in [`FoldError::InvalidOperation`].
pub fn try_fold<I, A, E, F>(sequence: I, initial: A, mut combine: F) -> FoldResult<A>
where
    I: IntoIterator,
    E: Display,
    F: FnMut(A, I::Item) -> Result<A, E>,
{
    let mut acc = initial;
    let mut steps = 0usize;

    for (index, element) in sequence.into_iter().enumerate() {
        acc = match combine(acc, element) {
            Ok(next) => next,
            Err(e) => {
                debug!(index, "fold aborted");
                return Err(FoldError::InvalidOperation {
                    index,
                    reason: e.to_string(),
                });
            }
        };
        trace!(index, "fold step");
        steps = index + 1;
    }

    debug!(steps, "fold complete");
    Ok(acc)
}

/// Fold seeded with the first element
///
/// `None` for an empty sequence.
pub fn reduce<I, F>(sequence: I, combine: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    let mut iter = sequence.into_iter();
    let first = iter.next()?;
    Some(fold(iter, first, combine))
}

/// Fold and record every intermediate accumulator
pub fn fold_traced<I, A, F>(
    sequence: I,
    initial: A,
    mut combine: F,
) -> (A, Vec<FoldStep<A, I::Item>>)
where
    I: IntoIterator,
    I::Item: Clone,
    A: Clone,
    F: FnMut(A, I::Item) -> A,
{
    let mut acc = initial;
    let mut steps = Vec::new();

    for (index, element) in sequence.into_iter().enumerate() {
        let before = acc.clone();
        acc = combine(acc, element.clone());
        trace!(index, "fold step");
        steps.push(FoldStep {
            index,
            before,
            element,
            after: acc.clone(),
        });
    }

    debug!(steps = steps.len(), "fold complete");
    (acc, steps)
}
