pub mod dot;
pub mod heap;
pub mod ordering;
pub mod priority_queue;

pub use heap::{Heap, DEFAULT_CAPACITY};
pub use ordering::{Comparator, NaturalOrder, Reversed};
pub use priority_queue::PriorityQueue;
