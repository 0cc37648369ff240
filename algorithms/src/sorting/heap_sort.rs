//! Heap sort on owned vectors, driven by `Heap::heap_sort`.
//!
//! `Heap::heap_sort` leaves its storage in descending order under the heap's
//! comparator, so sorting ascending runs the same pass over a reversed order.

use std::cmp::Ordering;

use crate::data_structures::{Comparator, Heap, NaturalOrder, Reversed};

pub fn heap_sort<T: Ord>(values: Vec<T>) -> Vec<T> {
    sort_with(values, Reversed(NaturalOrder))
}

pub fn heap_sort_descending<T: Ord>(values: Vec<T>) -> Vec<T> {
    sort_with(values, NaturalOrder)
}

/// Ascending under `compare`.
pub fn heap_sort_by<T, F>(values: Vec<T>, compare: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    sort_with(values, Reversed(compare))
}

fn sort_with<T, C: Comparator<T>>(values: Vec<T>, comparator: C) -> Vec<T> {
    let mut heap = Heap::with_comparator(comparator);
    heap.build_from_array(values);
    heap.heap_sort();
    heap.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending() {
        assert_eq!(heap_sort(vec![3, 1, 2]), vec![1, 2, 3]);
        assert_eq!(heap_sort(vec![5, 5, -1, 0, 9, 5]), vec![-1, 0, 5, 5, 5, 9]);
    }

    #[test]
    fn test_descending() {
        assert_eq!(heap_sort_descending(vec![9, 4, 7, 1, 2]), vec![9, 7, 4, 2, 1]);
    }

    #[test]
    fn test_by_key() {
        let words = vec!["pear", "fig", "banana"];
        let sorted = heap_sort_by(words, |a: &&str, b: &&str| a.len().cmp(&b.len()));
        assert_eq!(sorted, vec!["fig", "pear", "banana"]);
    }

    #[test]
    fn test_trivial_inputs() {
        assert_eq!(heap_sort(Vec::<u8>::new()), Vec::<u8>::new());
        assert_eq!(heap_sort(vec![42]), vec![42]);
    }
}
