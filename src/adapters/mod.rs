//! # Adapters
//!
//! Concrete implementations of the `OrderedSequence` port.
//!
//! Each source only knows how to yield its elements in order. Iteration,
//! filtering and folding all live behind the port, so sources can be swapped
//! without touching that logic.

pub mod sources;
