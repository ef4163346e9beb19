//! # seqfold
//!
//! Left folds and the iteration idioms built on them.
//!
//! `seqfold` takes one idea, the left fold, and builds the everyday
//! iteration vocabulary around it: `each`, `map`/`collect`,
//! `select`/`find_all`, `find` and `inject`/`reduce`. The same methods work on
//! anything that can hand out its elements in a fixed order: vectors,
//! integer ranges, lines of a file.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        seqfold                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure logic, no I/O)                                  │
//! │    fold, try_fold, reduce, fold_traced, FoldError           │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    OrderedSequence                                          │
//! │                                                              │
//! │  ADAPTERS (swappable implementations)                       │
//! │    Sources: Array, Range, Lines                             │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    LessonRunner - runs named cases, reports each one        │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use seqfold::{ArraySource, OrderedSequence, RangeSource};
//!
//! let array = ArraySource::from([2, 3, 4]);
//! assert_eq!(array.inject(0, |sum, item| sum + item), 9);
//! assert_eq!(array.select(|item| item % 2 == 0), vec![2, 4]);
//!
//! let range = RangeSource::from(1..=3);
//! assert_eq!(range.map(|item| item + 10), vec![11, 12, 13]);
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure fold logic, no I/O
pub mod core;

/// Port definitions - the OrderedSequence trait
pub mod ports;

/// Adapter implementations - concrete sequence sources
pub mod adapters;

/// Engine - lesson runner and built-in lessons
pub mod engine;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core
pub use crate::core::{fold, fold_traced, reduce, try_fold, FoldError, FoldResult, FoldStep};

// Port traits
pub use crate::ports::{OrderedSequence, SourceError, SourceResult};

// Adapters
pub use crate::adapters::sources::{ArraySource, LineSource, RangeSource};

// Engine
pub use crate::engine::{
    assert_equal, Lesson, LessonError, LessonOutcome, LessonResult, LessonRunner, LessonStatus,
    RunReport, RunnerConfig,
};
