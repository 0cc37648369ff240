//! Binary min-heap.
//!
//! Variables:
//!   data     : Vec<T>  — logical elements; data[k] holds logical index k+1
//!   N        : usize   — current size = data.len()
//!   capacity : usize   — allocated logical slots, slot 0 included (N <= capacity - 1)
//!   swaps    : usize   — number of element exchanges since the last reset
//!
//! Equations (logical, 1-indexed):
//!   parent(i)      = i / 2
//!   left_child(i)  = 2*i
//!   right_child(i) = 2*i + 1
//!
//!   Heap invariant: value(parent(i)) <= value(i)  for all 1 < i <= N
//!
//!   insert(x):      N == capacity - 1 => capacity' = 2*capacity
//!                   value(N+1) = x, N' = N+1, percolate_up(N')       O(log N)
//!   extract_min():  swap(1, N), N' = N-1, percolate_down(1)          O(log N)
//!   build(xs):      value(1..=n) = xs, capacity' = n+1,
//!                   percolate_down(i) for i = n/2 down to 1          O(N)
//!   heap_sort():    extract until N = 0, then N' = N                 O(N log N)

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::data_structures::ordering::{Comparator, NaturalOrder};
use crate::error::{HeapError, HeapResult};

/// Logical slots (slot 0 included) allocated by a fresh or cleared heap.
pub const DEFAULT_CAPACITY: usize = 10;

/// Array-backed binary min-heap ordered by `C`.
///
/// All index-taking methods use logical, 1-based positions: the root is `1`
/// and the children of `i` are `2i` and `2i + 1`. Slices and snapshots handed
/// out are 0-based, so `snapshot()[k]` is the element at logical index `k + 1`.
#[derive(Clone)]
pub struct Heap<T, C = NaturalOrder> {
    data: Vec<T>,
    capacity: usize,
    comparator: C,
    swaps: usize,
}

impl<T: Ord> Heap<T> {
    /// Empty heap over the natural order of `T`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T: Ord> Default for Heap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> Heap<T, C> {
    /// Empty heap ordered by `comparator` for its whole lifetime.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            data: Vec::with_capacity(DEFAULT_CAPACITY - 1),
            capacity: DEFAULT_CAPACITY,
            comparator,
            swaps: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Alias of [`Heap::len`].
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Allocated logical slots, counting the unused slot 0.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn swap_count(&self) -> usize {
        self.swaps
    }

    pub fn reset_swap_count(&mut self) {
        self.swaps = 0;
    }

    pub fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self.comparator.compare(lhs, rhs)
    }

    /// Smallest element, without removing it.
    pub fn peek(&self) -> HeapResult<&T> {
        self.data.first().ok_or(HeapError::EmptyContainer)
    }

    pub fn insert(&mut self, value: T) {
        if self.data.len() == self.capacity - 1 {
            self.resize();
        }
        self.data.push(value);
        self.percolate_up(self.data.len());
    }

    /// Removes and returns the smallest element.
    pub fn extract_min(&mut self) -> HeapResult<T> {
        let last = self.data.len();
        if last == 0 {
            return Err(HeapError::EmptyContainer);
        }
        self.evict_root(last);
        self.data.pop().ok_or(HeapError::EmptyContainer)
    }

    /// Replaces the contents with `values` and restores heap order bottom-up.
    ///
    /// Only the first half of the positions can have children, so repairing
    /// them from the deepest one upwards is linear in the number of elements.
    /// The swap counter keeps accumulating.
    pub fn build_from_array<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.data = values.into_iter().collect();
        let n = self.data.len();
        self.capacity = n + 1;
        let before = self.swaps;
        for index in (1..=n / 2).rev() {
            self.percolate_down(index, n);
        }
        debug!(len = n, swaps = self.swaps - before, "built heap from array");
    }

    /// Sorts the storage into descending order in place.
    ///
    /// Terminal operation: the minimum is evicted to the end of a shrinking
    /// window until the window is empty, then the size is left at its
    /// original value so the sorted sequence can be read back through
    /// [`Heap::snapshot`], [`Heap::as_slice`] or [`Heap::into_vec`]. The heap
    /// order no longer holds afterwards; call [`Heap::clear`] or
    /// [`Heap::build_from_array`] before using the heap again.
    pub fn heap_sort(&mut self) {
        let len = self.data.len();
        let before = self.swaps;
        for limit in (1..=len).rev() {
            self.evict_root(limit);
        }
        debug!(len, swaps = self.swaps - before, "heap sorted in place");
    }

    /// Back to the empty, default-capacity state. The swap counter is kept.
    pub fn clear(&mut self) {
        self.data = Vec::with_capacity(DEFAULT_CAPACITY - 1);
        self.capacity = DEFAULT_CAPACITY;
        trace!("heap cleared");
    }

    /// Exchanges the elements at logical indices `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) -> HeapResult<()> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.exchange(i, j);
        Ok(())
    }

    /// Index of the smaller of the children at logical indices `i` and `j`.
    ///
    /// `None` when `i` is past the end, `Some(i)` when only `j` is. Ties go
    /// to `i`.
    pub fn minimum_of_two_children(&self, i: usize, j: usize) -> HeapResult<Option<usize>> {
        for index in [i, j] {
            if index < 1 {
                return Err(HeapError::InvalidArgument {
                    index,
                    size: self.data.len(),
                });
            }
        }
        Ok(self.min_child_within(i, j, self.data.len()))
    }

    /// Copy of the elements in storage order, 0-based.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn resize(&mut self) {
        let capacity = self.capacity * 2;
        self.data.reserve_exact(capacity - 1 - self.data.len());
        trace!(from = self.capacity, to = capacity, "heap storage doubled");
        self.capacity = capacity;
    }

    fn check_index(&self, index: usize) -> HeapResult<()> {
        if index < 1 || index > self.data.len() {
            return Err(HeapError::InvalidArgument {
                index,
                size: self.data.len(),
            });
        }
        Ok(())
    }

    // sole place the swap counter moves
    fn exchange(&mut self, i: usize, j: usize) {
        self.data.swap(i - 1, j - 1);
        self.swaps += 1;
    }

    fn order_at(&self, i: usize, j: usize) -> Ordering {
        self.comparator.compare(&self.data[i - 1], &self.data[j - 1])
    }

    // moves the root past the end of the first `limit` slots
    fn evict_root(&mut self, limit: usize) {
        self.exchange(1, limit);
        self.percolate_down(1, limit - 1);
    }

    fn percolate_up(&mut self, mut index: usize) {
        while index > 1 && self.order_at(index, index / 2) == Ordering::Less {
            self.exchange(index, index / 2);
            index /= 2;
        }
    }

    fn percolate_down(&mut self, mut index: usize, limit: usize) {
        while let Some(child) = self.min_child_within(2 * index, 2 * index + 1, limit) {
            if self.order_at(index, child) != Ordering::Greater {
                break;
            }
            self.exchange(index, child);
            index = child;
        }
    }

    fn min_child_within(&self, i: usize, j: usize, limit: usize) -> Option<usize> {
        if i > limit {
            None
        } else if j > limit {
            Some(i)
        } else if self.order_at(i, j) == Ordering::Greater {
            Some(j)
        } else {
            Some(i)
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("data", &self.data)
            .field("capacity", &self.capacity)
            .field("swaps", &self.swaps)
            .finish()
    }
}

impl<T: Ord> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Heap::new();
        heap.build_from_array(iter);
        heap
    }
}

impl<T, C: Comparator<T>> Extend<T> for Heap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a Heap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
