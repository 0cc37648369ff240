//! Minimal priority-queue contract. `Heap` is the only implementation; the
//! timing harness is written against this trait.

use crate::data_structures::heap::Heap;
use crate::data_structures::ordering::Comparator;
use crate::error::HeapResult;

pub trait PriorityQueue<T> {
    fn add(&mut self, value: T);
    fn dequeue(&mut self) -> HeapResult<T>;
    fn peek(&self) -> HeapResult<&T>;
    fn size(&self) -> usize;
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T> for Heap<T, C> {
    fn add(&mut self, value: T) {
        self.insert(value);
    }

    fn dequeue(&mut self) -> HeapResult<T> {
        self.extract_min()
    }

    fn peek(&self) -> HeapResult<&T> {
        Heap::peek(self)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn clear(&mut self) {
        Heap::clear(self);
    }
}
