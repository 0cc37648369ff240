pub mod heap_sort;

pub use heap_sort::{heap_sort, heap_sort_by, heap_sort_descending};
