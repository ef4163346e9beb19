//! # Range Source
//!
//! Inclusive integer range, `start..=end`.

use std::ops::RangeInclusive;

use crate::ports::OrderedSequence;

/// Ordered sequence over an inclusive `i64` range
///
/// Empty when `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSource {
    start: i64,
    end: i64,
}

impl RangeSource {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }
}

impl From<RangeInclusive<i64>> for RangeSource {
    fn from(range: RangeInclusive<i64>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl OrderedSequence for RangeSource {
    type Item = i64;

    fn elements(&self) -> Box<dyn Iterator<Item = i64> + '_> {
        Box::new(self.start..=self.end)
    }

    /// Saturates at `usize::MAX` for ranges wider than the address space
    fn len(&self) -> usize {
        if self.start > self.end {
            return 0;
        }
        let span = i128::from(self.end) - i128::from(self.start) + 1;
        usize::try_from(span).unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_map() {
        let range = RangeSource::from(1..=3);
        assert_eq!(range.map(|item| item + 10), vec![11, 12, 13]);
    }

    #[test]
    fn test_range_inject() {
        let range = RangeSource::new(1, 100);

        assert_eq!(range.len(), 100);
        assert_eq!(range.inject(0, |sum, item| sum + item), 5050);
    }

    #[test]
    fn test_range_reversed_is_empty() {
        let range = RangeSource::new(5, 1);

        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert_eq!(range.inject(7, |sum, item| sum + item), 7);
        assert_eq!(range.reduce(|a, b| a + b), None);
    }

    #[test]
    fn test_range_len_extremes() {
        let wide = RangeSource::new(-1, i64::MAX);
        let full = RangeSource::new(i64::MIN, i64::MAX);

        // 2^63 + 1 elements, saturating on narrow targets
        let expected = usize::try_from((1u128 << 63) + 1).unwrap_or(usize::MAX);
        assert_eq!(wide.len(), expected);
        assert_eq!(full.len(), usize::MAX);
        assert!(!full.is_empty());
        assert_eq!(RangeSource::new(i64::MAX, i64::MAX).len(), 1);
    }

    #[test]
    fn test_range_single_element() {
        let range = RangeSource::from(4..=4);

        assert_eq!(range.len(), 1);
        assert_eq!(range.reduce(|a, b| a * b), Some(4));
    }
}
