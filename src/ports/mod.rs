//! # Ports
//!
//! Trait contracts that sources implement.
//!
//! The fold engine and every iteration primitive are written against
//! [`OrderedSequence`] only. Arrays, ranges and file lines all become the
//! same thing once they implement it.

use std::ops::ControlFlow;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::fold;
use crate::core::{FoldResult, FoldStep};

/// Errors from producing a sequence
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from a caller-supplied reader failed
    #[error("failed to read lines: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Anything that yields its elements in a fixed, repeatable order
///
/// Implementors provide [`elements`](OrderedSequence::elements); everything
/// else (`each`, `map`, `select`, `find`, `inject`, ...) comes for free.
pub trait OrderedSequence {
    /// Element type
    type Item;

    /// Iterate the elements, first to last
    ///
    /// Every call must yield the same elements in the same order.
    fn elements(&self) -> Box<dyn Iterator<Item = Self::Item> + '_>;

    /// Number of elements
    fn len(&self) -> usize {
        self.elements().count()
    }

    /// Check if there are no elements
    fn is_empty(&self) -> bool {
        self.elements().next().is_none()
    }

    // ========================================================================
    // EACH
    // ========================================================================

    /// Call `f` on every element
    fn each<F>(&self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        for element in self.elements() {
            f(element);
        }
    }

    /// Call `f` on elements until it breaks
    ///
    /// Returns how many elements were handed to `f`, including the one that
    /// broke.
    fn each_while<F>(&self, mut f: F) -> usize
    where
        Self: Sized,
        F: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let mut visited = 0;
        for element in self.elements() {
            visited += 1;
            if f(element).is_break() {
                break;
            }
        }
        visited
    }

    // ========================================================================
    // TRANSFORM / FILTER / SEARCH
    // ========================================================================

    /// Transform every element into a new `Vec`
    fn map<B, F>(&self, f: F) -> Vec<B>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        self.elements().map(f).collect()
    }

    /// Alias for [`map`](OrderedSequence::map)
    fn collect<B, F>(&self, f: F) -> Vec<B>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        self.map(f)
    }

    /// Keep the elements matching `predicate`, in order
    fn select<P>(&self, mut predicate: P) -> Vec<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.elements().filter(|e| predicate(e)).collect()
    }

    /// Alias for [`select`](OrderedSequence::select)
    fn find_all<P>(&self, predicate: P) -> Vec<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.select(predicate)
    }

    /// First element matching `predicate`
    fn find<P>(&self, mut predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.elements().find(|e| predicate(e))
    }

    // ========================================================================
    // FOLD
    // ========================================================================

    /// Left fold from `initial`
    fn inject<A, F>(&self, initial: A, combine: F) -> A
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
    {
        fold::fold(self.elements(), initial, combine)
    }

    /// Left fold that stops at the first failing element
    fn try_inject<A, E, F>(&self, initial: A, combine: F) -> FoldResult<A>
    where
        Self: Sized,
        E: std::fmt::Display,
        F: FnMut(A, Self::Item) -> Result<A, E>,
    {
        fold::try_fold(self.elements(), initial, combine)
    }

    /// Left fold seeded with the first element
    fn reduce<F>(&self, combine: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        fold::reduce(self.elements(), combine)
    }

    /// Left fold that also returns every step
    fn inject_traced<A, F>(&self, initial: A, combine: F) -> (A, Vec<FoldStep<A, Self::Item>>)
    where
        Self: Sized,
        Self::Item: Clone,
        A: Clone,
        F: FnMut(A, Self::Item) -> A,
    {
        fold::fold_traced(self.elements(), initial, combine)
    }
}
