//! # Sequence Sources
//!
//! Implementations of the OrderedSequence port.
//!
//! Available adapters:
//! - `ArraySource` - In-memory vector
//! - `RangeSource` - Inclusive integer range
//! - `LineSource` - Lines of a text file

mod array;
mod lines;
mod range;

pub use array::ArraySource;
pub use lines::LineSource;
pub use range::RangeSource;
