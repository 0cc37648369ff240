use std::fmt::Write;
use std::time::Duration;

use serde::Serialize;

use crate::timing::{DataOrder, Experiment};

/// Mean cost of one measured step over all trials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Measurement {
    pub nanos: f64,
    pub swaps: f64,
}

/// One line of output for problem size `n`.
///
/// `bulk` covers the whole batch (n inserts, n extracts, one build, one
/// sort); `single` is the extra one-element step of the insert and extract
/// experiments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingRow {
    pub n: usize,
    pub bulk: Measurement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single: Option<Measurement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    JsonLines,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::JsonLines => "jsonl",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingReport {
    pub experiment: Experiment,
    pub order: Option<DataOrder>,
    pub rows: Vec<TimingRow>,
}

impl TimingReport {
    pub fn new(experiment: Experiment, order: Option<DataOrder>) -> Self {
        Self {
            experiment,
            order,
            rows: Vec::new(),
        }
    }

    /// `insertTimesBACK_ORDER.csv`, `deleteTimes.csv`, ...
    pub fn file_name(&self, format: OutputFormat) -> String {
        let stem = match self.experiment {
            Experiment::Insert => "insertTimes",
            Experiment::Extract => "deleteTimes",
            Experiment::Build => "buildFromArrayTimes",
            Experiment::Sort => "sortTimes",
        };
        let order = self.order.map(DataOrder::label).unwrap_or_default();
        format!("{stem}{order}.{}", format.extension())
    }

    /// Headerless CSV: `n,nanos,swaps[,single_nanos,single_swaps]`.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let _ = write!(out, "{},{},{}", row.n, row.bulk.nanos, row.bulk.swaps);
            if let Some(single) = row.single {
                let _ = write!(out, ",{},{}", single.nanos, single.swaps);
            }
            out.push('\n');
        }
        out
    }

    /// One JSON object per row, tagged with the experiment and order.
    pub fn to_json_lines(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct Line<'a> {
            experiment: Experiment,
            #[serde(skip_serializing_if = "Option::is_none")]
            order: Option<DataOrder>,
            #[serde(flatten)]
            row: &'a TimingRow,
        }

        let mut out = String::new();
        for row in &self.rows {
            let line = Line {
                experiment: self.experiment,
                order: self.order,
                row,
            };
            out.push_str(&serde_json::to_string(&line)?);
            out.push('\n');
        }
        Ok(out)
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Csv => Ok(self.to_csv()),
            OutputFormat::JsonLines => self.to_json_lines(),
        }
    }
}

/// Running sums over trials.
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    nanos: f64,
    swaps: f64,
    trials: usize,
}

impl Accumulator {
    pub(crate) fn record(&mut self, elapsed: Duration, swaps: usize) {
        self.nanos += elapsed.as_nanos() as f64;
        self.swaps += swaps as f64;
        self.trials += 1;
    }

    pub(crate) fn mean(&self) -> Measurement {
        if self.trials == 0 {
            return Measurement::default();
        }
        let trials = self.trials as f64;
        Measurement {
            nanos: self.nanos / trials,
            swaps: self.swaps / trials,
        }
    }
}
