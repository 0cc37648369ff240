// Property-based tests for heap invariants:
// 1. heap order holds after any insert/extract/build sequence
// 2. size tracks inserts minus extracts
// 3. extraction yields a sorted sequence
// 4. heap_sort leaves a descending permutation and restores the size

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use heap_algorithms::Heap;

#[derive(Debug, Clone)]
enum Op {
    Insert(i16),
    Extract,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i16>().prop_map(Op::Insert),
        1 => Just(Op::Extract),
    ]
}

fn holds_heap_order(data: &[i16]) -> bool {
    (2..=data.len()).all(|i| data[i / 2 - 1] <= data[i - 1])
}

fn sorted(mut values: Vec<i16>) -> Vec<i16> {
    values.sort_unstable();
    values
}

proptest! {
    #[test]
    fn prop_operations_keep_invariants(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut heap = Heap::new();
        let mut model: Vec<i16> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(v) => {
                    heap.insert(v);
                    model.push(v);
                }
                Op::Extract => {
                    let expected = model.iter().copied().min();
                    match expected {
                        Some(min) => {
                            prop_assert_eq!(heap.extract_min().unwrap(), min);
                            let at = model.iter().position(|&v| v == min).unwrap();
                            model.swap_remove(at);
                        }
                        None => prop_assert!(heap.extract_min().is_err()),
                    }
                }
            }
            prop_assert_eq!(heap.size(), model.len());
            prop_assert!(holds_heap_order(heap.as_slice()));
            prop_assert!(heap.capacity() > heap.size());
        }

        prop_assert_eq!(sorted(heap.snapshot()), sorted(model));
    }

    #[test]
    fn prop_build_from_array_is_heap(values in prop::collection::vec(any::<i16>(), 0..300)) {
        let mut heap = Heap::new();
        heap.build_from_array(values.clone());
        prop_assert_eq!(heap.size(), values.len());
        prop_assert!(holds_heap_order(heap.as_slice()));
        prop_assert_eq!(sorted(heap.snapshot()), sorted(values));
    }

    #[test]
    fn prop_extraction_is_sorted(values in prop::collection::vec(any::<i16>(), 0..300)) {
        let mut heap = Heap::new();
        for &v in &values {
            heap.insert(v);
        }
        let mut drained = Vec::with_capacity(values.len());
        while let Ok(v) = heap.extract_min() {
            drained.push(v);
        }
        prop_assert_eq!(drained, sorted(values));
    }

    #[test]
    fn prop_heap_sort_descending(values in prop::collection::vec(any::<i16>(), 0..300)) {
        let mut heap = Heap::new();
        for &v in &values {
            heap.insert(v);
        }
        heap.heap_sort();
        prop_assert_eq!(heap.size(), values.len());
        let mut expected = sorted(values);
        expected.reverse();
        prop_assert_eq!(heap.snapshot(), expected);
    }
}
