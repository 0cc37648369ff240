//! # Heap Algorithms Crate
//!
//! Array-backed binary min-heap with heap sort and swap instrumentation.
//!
//! ## Modules
//!
//! - `data_structures` – `Heap`, ordering strategies, the `PriorityQueue` trait, DOT export
//! - `sorting` – heap sort over owned vectors
//! - `timing` – timing experiments (insert, extract, build, sort) and their CSV/JSON reports
//! - `error` – `HeapError`, `TimingError`
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use heap_algorithms::data_structures::Heap;
//!
//! let mut heap = Heap::new();
//! for v in [5, 6, 3, 7, 8, 1] {
//!     heap.insert(v);
//! }
//! assert_eq!(heap.snapshot(), vec![1, 6, 3, 7, 8, 5]);
//! assert_eq!(heap.extract_min(), Ok(1));
//! assert_eq!(heap.snapshot(), vec![3, 6, 5, 7, 8]);
//! ```

pub mod data_structures;
pub mod error;
pub mod sorting;
pub mod timing;

pub use data_structures::{Comparator, Heap, NaturalOrder, PriorityQueue, Reversed};
pub use error::{HeapError, HeapResult, TimingError};
