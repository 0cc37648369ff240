use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use heap_algorithms::timing::DataOrder;
use heap_algorithms::Heap;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SIZES: &[usize] = &[1_000, 10_000, 100_000];

fn values(order: DataOrder, n: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    order.values(n, &mut rng)
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in SIZES {
        let data = values(DataOrder::BackOrder, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| {
                let mut heap = Heap::new();
                for &v in data {
                    heap.insert(v);
                }
                black_box(heap.swap_count())
            });
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_from_array");
    for &n in SIZES {
        let data = values(DataOrder::Random, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| {
                let mut heap = Heap::new();
                heap.build_from_array(data.iter().copied());
                black_box(heap.swap_count())
            });
        });
    }
    group.finish();
}

fn bench_heap_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_sort");
    for &n in SIZES {
        let heap: Heap<u64> = values(DataOrder::Random, n).into_iter().collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &heap, |b, heap| {
            b.iter(|| {
                let mut heap = heap.clone();
                heap.heap_sort();
                black_box(heap.swap_count())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_build, bench_heap_sort);
criterion_main!(benches);
