//! Graphviz export for heaps.
//!
//! Each element becomes a three-field record node (`<f0>` left edge port,
//! `<f1>` value, `<f2>` right edge port); node `k` links to nodes `2k` and
//! `2k + 1` when they exist. Diagnostics are appended as `//` comments so the
//! output stays valid DOT.

use std::fmt::{self, Display, Write};

use crate::data_structures::heap::Heap;
use crate::data_structures::ordering::Comparator;

/// Render `elements` (0-based storage order) as a DOT digraph.
pub fn export_dot<T: Display>(elements: &[T], swaps: usize) -> String {
    let size = elements.len();
    let mut out = String::new();

    out.push_str("digraph Heap {\n\tnode [shape=record]\n");
    for (k, value) in elements.iter().enumerate() {
        let i = k + 1;
        // String writes are infallible
        let _ = writeln!(out, "\tnode{i} [label = \"<f0> |<f1> {value}|<f2> \"]");
        if 2 * i <= size {
            let _ = writeln!(out, "\tnode{i}:f0 -> node{}:f1", 2 * i);
        }
        if 2 * i + 1 <= size {
            let _ = writeln!(out, "\tnode{i}:f2 -> node{}:f1", 2 * i + 1);
        }
    }
    out.push('}');

    out.push_str("\n//--------------------------------------------\n");
    let _ = write!(out, "// size: {size}\n// swaps: {swaps}");
    out
}

impl<T: Display, C: Comparator<T>> Heap<T, C> {
    pub fn to_dot(&self) -> String {
        export_dot(self.as_slice(), self.swap_count())
    }
}

impl<T: Display, C: Comparator<T>> Display for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dot())
    }
}
