//! Timing experiments over `Heap<u64>`.
//!
//! For every `n` in `start..=end` (step `increment`) an experiment runs
//! `trials` times and reports the mean elapsed nanoseconds and mean swap
//! count, read from the heap's swap counter.

pub mod harness;
pub mod report;

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::TimingError;

pub use harness::TimingHarness;
pub use report::{Measurement, OutputFormat, TimingReport, TimingRow};

pub const DEFAULT_START: usize = 1_000;
pub const DEFAULT_END: usize = 2_001_001;
pub const DEFAULT_INCREMENT: usize = 100_000;
pub const DEFAULT_TRIALS: usize = 100;

/// Shape of the input data fed to an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataOrder {
    /// uniform in `0..n`
    Random,
    /// `0, 1, .., n - 1`
    InOrder,
    /// `n, n - 1, .., 1`
    BackOrder,
}

impl DataOrder {
    pub fn label(self) -> &'static str {
        match self {
            DataOrder::Random => "RANDOM",
            DataOrder::InOrder => "IN_ORDER",
            DataOrder::BackOrder => "BACK_ORDER",
        }
    }

    pub fn values<R: Rng>(self, n: usize, rng: &mut R) -> Vec<u64> {
        let bound = n as u64;
        (0..n)
            .map(|index| match self {
                DataOrder::Random => rng.gen_range(0..bound),
                DataOrder::InOrder => index as u64,
                DataOrder::BackOrder => bound - index as u64,
            })
            .collect()
    }
}

impl fmt::Display for DataOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Experiment {
    Insert,
    Extract,
    Build,
    Sort,
}

impl fmt::Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Experiment::Insert => "insert",
            Experiment::Extract => "extract",
            Experiment::Build => "build",
            Experiment::Sort => "sort",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    pub start: usize,
    pub end: usize,
    pub increment: usize,
    pub trials: usize,
    /// Fixed seed for reproducible random data; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
            increment: DEFAULT_INCREMENT,
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}

impl TimingConfig {
    pub fn validate(&self) -> Result<(), TimingError> {
        if self.start == 0 {
            return Err(TimingError::ZeroStart);
        }
        if self.increment == 0 {
            return Err(TimingError::ZeroIncrement);
        }
        if self.trials == 0 {
            return Err(TimingError::ZeroTrials);
        }
        if self.start > self.end {
            return Err(TimingError::EmptyRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Problem sizes visited, in increasing order.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.start..=self.end).step_by(self.increment.max(1))
    }
}
