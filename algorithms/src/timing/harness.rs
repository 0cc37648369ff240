use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::data_structures::{Heap, PriorityQueue};
use crate::error::TimingError;
use crate::timing::report::Accumulator;
use crate::timing::{DataOrder, Experiment, TimingConfig, TimingReport, TimingRow};

/// Runs the timing experiments for one configuration.
pub struct TimingHarness {
    config: TimingConfig,
    rng: StdRng,
}

impl TimingHarness {
    pub fn new(config: TimingConfig) -> Result<Self, TimingError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    /// `n` inserts of `order` data into an empty heap, then one random insert
    /// into the resulting `n`-element heap.
    pub fn insert(&mut self, order: DataOrder) -> TimingReport {
        let mut report = TimingReport::new(Experiment::Insert, Some(order));
        for n in self.config.sizes() {
            let mut bulk = Accumulator::default();
            let mut single = Accumulator::default();
            for _ in 0..self.config.trials {
                let values = order.values(n, &mut self.rng);
                let mut heap: Heap<u64> = Heap::new();

                let started = Instant::now();
                fill(&mut heap, values);
                bulk.record(started.elapsed(), heap.swap_count());
                heap.reset_swap_count();

                let extra = self.rng.gen_range(0..n as u64);
                let started = Instant::now();
                heap.add(extra);
                single.record(started.elapsed(), heap.swap_count());
            }
            push_row(&mut report, n, bulk, Some(single));
        }
        report
    }

    /// On a heap of `n + 1` random values: one extract, then the remaining
    /// `n` extracts.
    pub fn extract(&mut self) -> Result<TimingReport, TimingError> {
        let mut report = TimingReport::new(Experiment::Extract, None);
        for n in self.config.sizes() {
            let mut bulk = Accumulator::default();
            let mut single = Accumulator::default();
            for _ in 0..self.config.trials {
                let mut heap = self.random_heap(n + 1);
                heap.reset_swap_count();

                let started = Instant::now();
                heap.dequeue()?;
                single.record(started.elapsed(), heap.swap_count());
                heap.reset_swap_count();

                let started = Instant::now();
                for _ in 0..n {
                    heap.dequeue()?;
                }
                bulk.record(started.elapsed(), heap.swap_count());
            }
            push_row(&mut report, n, bulk, Some(single));
        }
        Ok(report)
    }

    /// `build_from_array` over `n` values in `order`.
    pub fn build(&mut self, order: DataOrder) -> TimingReport {
        let mut report = TimingReport::new(Experiment::Build, Some(order));
        for n in self.config.sizes() {
            let mut bulk = Accumulator::default();
            for _ in 0..self.config.trials {
                let values = order.values(n, &mut self.rng);
                let mut heap: Heap<u64> = Heap::new();

                let started = Instant::now();
                heap.build_from_array(values);
                bulk.record(started.elapsed(), heap.swap_count());
            }
            push_row(&mut report, n, bulk, None);
        }
        report
    }

    /// `heap_sort` on a heap of `n + 1` random values.
    pub fn sort(&mut self) -> TimingReport {
        let mut report = TimingReport::new(Experiment::Sort, None);
        for n in self.config.sizes() {
            let mut bulk = Accumulator::default();
            for _ in 0..self.config.trials {
                let mut heap = self.random_heap(n + 1);
                heap.reset_swap_count();

                let started = Instant::now();
                heap.heap_sort();
                bulk.record(started.elapsed(), heap.swap_count());
            }
            push_row(&mut report, n, bulk, None);
        }
        report
    }

    /// Every experiment of the reference run: back-ordered inserts, extracts,
    /// builds over all three orders, sort.
    pub fn run_all(&mut self) -> Result<Vec<TimingReport>, TimingError> {
        let mut reports = vec![self.insert(DataOrder::BackOrder), self.extract()?];
        for order in [DataOrder::Random, DataOrder::InOrder, DataOrder::BackOrder] {
            reports.push(self.build(order));
        }
        reports.push(self.sort());
        Ok(reports)
    }

    fn random_heap(&mut self, len: usize) -> Heap<u64> {
        let bound = len as u64;
        let mut heap = Heap::new();
        fill(&mut heap, (0..len).map(|_| self.rng.gen_range(0..bound)));
        heap
    }
}

fn fill<Q, I>(queue: &mut Q, values: I)
where
    Q: PriorityQueue<u64>,
    I: IntoIterator<Item = u64>,
{
    for value in values {
        queue.add(value);
    }
}

fn push_row(report: &mut TimingReport, n: usize, bulk: Accumulator, single: Option<Accumulator>) {
    let row = TimingRow {
        n,
        bulk: bulk.mean(),
        single: single.map(|acc| acc.mean()),
    };
    info!(
        experiment = %report.experiment,
        order = ?report.order,
        n,
        nanos = row.bulk.nanos,
        swaps = row.bulk.swaps,
        "timing row"
    );
    report.rows.push(row);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> TimingHarness {
        TimingHarness::new(TimingConfig {
            start: 8,
            end: 24,
            increment: 8,
            trials: 3,
            seed: Some(42),
        })
        .unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = TimingConfig {
            increment: 0,
            ..TimingConfig::default()
        };
        assert!(matches!(TimingHarness::new(config), Err(TimingError::ZeroIncrement)));
    }

    #[test]
    fn test_insert_in_order_never_swaps() {
        let report = small().insert(DataOrder::InOrder);
        let sizes: Vec<usize> = report.rows.iter().map(|row| row.n).collect();
        assert_eq!(sizes, vec![8, 16, 24]);
        assert!(report.rows.iter().all(|row| row.bulk.swaps == 0.0));
        assert!(report.rows.iter().all(|row| row.single.is_some()));
    }

    #[test]
    fn test_insert_back_order_swaps_every_level() {
        let report = small().insert(DataOrder::BackOrder);
        // value n - i climbs to the root: floor(log2(i + 1)) swaps
        let expected: usize = (1..=8usize).map(|k| k.ilog2() as usize).sum();
        assert_eq!(report.rows[0].bulk.swaps, expected as f64);
    }

    #[test]
    fn test_build_in_order_never_swaps() {
        let report = small().build(DataOrder::InOrder);
        assert!(report.rows.iter().all(|row| row.bulk.swaps == 0.0 && row.single.is_none()));
    }

    #[test]
    fn test_sort_swaps_at_least_once_per_element() {
        let report = small().sort();
        assert!(report.rows.iter().all(|row| row.bulk.swaps >= (row.n + 1) as f64));
    }

    #[test]
    fn test_run_all_covers_reference_reports() {
        let reports = small().run_all().unwrap();
        let names: Vec<String> = reports
            .iter()
            .map(|report| report.file_name(crate::timing::OutputFormat::Csv))
            .collect();
        assert_eq!(
            names,
            vec![
                "insertTimesBACK_ORDER.csv",
                "deleteTimes.csv",
                "buildFromArrayTimesRANDOM.csv",
                "buildFromArrayTimesIN_ORDER.csv",
                "buildFromArrayTimesBACK_ORDER.csv",
                "sortTimes.csv",
            ]
        );
        assert!(reports.iter().all(|report| report.rows.len() == 3));
    }
}
