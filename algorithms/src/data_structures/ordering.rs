//! Ordering strategies for `Heap`.
//!
//! A heap is built either over the element type's own total order
//! (`NaturalOrder`, requires `T: Ord`) or over a caller-supplied comparison.
//! The strategy is a type parameter, so it is fixed when the heap is created.

use std::cmp::Ordering;

/// Comparison strategy used by heaps.
pub trait Comparator<T> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

/// Delegates to `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Reverses another strategy; turns the min-heap into a max-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self.0.compare(rhs, lhs)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order_delegates_to_ord() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&"b", &"a"), Ordering::Greater);
        assert_eq!(NaturalOrder.compare(&7u8, &7u8), Ordering::Equal);
    }

    #[test]
    fn test_reversed_flips_result() {
        assert_eq!(Reversed(NaturalOrder).compare(&1, &2), Ordering::Greater);
    }

    #[test]
    fn test_closure_is_a_comparator() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare(&"abc", &"z"), Ordering::Greater);
    }
}
