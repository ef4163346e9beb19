//! # Array Source
//!
//! In-memory sequence backed by a `Vec`.

use crate::ports::OrderedSequence;

/// Ordered sequence over owned values
///
/// Elements are cloned out on iteration so the source stays untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArraySource<T> {
    items: Vec<T>,
}

impl<T: Clone> ArraySource<T> {
    /// Wrap a vector
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Borrow the underlying elements
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> From<Vec<T>> for ArraySource<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Clone, const N: usize> From<[T; N]> for ArraySource<T> {
    fn from(items: [T; N]) -> Self {
        Self::new(items.to_vec())
    }
}

impl<T: Clone> OrderedSequence for ArraySource<T> {
    type Item = T;

    fn elements(&self) -> Box<dyn Iterator<Item = T> + '_> {
        Box::new(self.items.iter().cloned())
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use super::*;

    #[test]
    fn test_array_each_sums() {
        let array = ArraySource::from([1, 2, 3]);
        let mut sum = 0;

        array.each(|item| sum += item);

        assert_eq!(sum, 6);
    }

    #[test]
    fn test_array_each_while_breaks() {
        let array = ArraySource::from([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        let mut sum = 0;

        let visited = array.each_while(|item| {
            if item > 3 {
                return ControlFlow::Break(());
            }
            sum += item;
            ControlFlow::Continue(())
        });

        assert_eq!(sum, 6);
        assert_eq!(visited, 4);
    }

    #[test]
    fn test_array_map_and_collect_agree() {
        let array = ArraySource::from([1, 2, 3]);

        assert_eq!(array.map(|item| item + 10), vec![11, 12, 13]);
        assert_eq!(array.collect(|item| item + 10), vec![11, 12, 13]);
    }

    #[test]
    fn test_array_select_and_find_all_agree() {
        let array = ArraySource::from([1, 2, 3, 4, 5, 6]);

        assert_eq!(array.select(|item| item % 2 == 0), vec![2, 4, 6]);
        assert_eq!(array.find_all(|item| item % 2 == 0), vec![2, 4, 6]);
    }

    #[test]
    fn test_array_find_first_match() {
        let array = ArraySource::from(["Jim", "Bill", "Clarence", "Doug", "Eli"]);

        assert_eq!(array.find(|name| name.len() > 4), Some("Clarence"));
        assert_eq!(array.find(|name| name.len() > 10), None);
    }

    #[test]
    fn test_array_inject() {
        assert_eq!(ArraySource::from([2, 3, 4]).inject(0, |sum, item| sum + item), 9);
        assert_eq!(ArraySource::from([2, 3, 4]).inject(1, |product, item| product * item), 24);
        assert_eq!(ArraySource::from([2, 3, 4, 5]).inject(3, |product, item| product * item), 360);
        assert_eq!(ArraySource::<i32>::default().inject(5, |sum, item| sum + item), 5);
    }

    #[test]
    fn test_array_try_inject_stops_on_error() {
        let array = ArraySource::from([2u8, 100, 200, 4]);

        let result = array.try_inject(0u8, |sum, item| sum.checked_add(item).ok_or("overflow"));

        match result {
            Err(crate::core::FoldError::InvalidOperation { index, reason }) => {
                assert_eq!(index, 2);
                assert_eq!(reason, "overflow");
            }
            other => panic!("Expected InvalidOperation, got {:?}", other),
        }
    }

    #[test]
    fn test_array_untouched_by_iteration() {
        let array = ArraySource::from(vec![4, 5, 6]);

        let first = array.inject(0, |a, b| a + b);
        let second = array.inject(0, |a, b| a + b);

        assert_eq!(first, second);
        assert_eq!(array.as_slice(), &[4, 5, 6]);
        assert_eq!(array.len(), 3);
        assert!(!array.is_empty());
    }
}
