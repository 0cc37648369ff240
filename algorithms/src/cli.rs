use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use heap_algorithms::timing::{
    DataOrder, OutputFormat, TimingConfig, DEFAULT_END, DEFAULT_INCREMENT, DEFAULT_START,
    DEFAULT_TRIALS,
};

#[derive(Parser)]
#[command(name = "heap-timing", about = "Timing experiments for the binary min-heap", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// n inserts into an empty heap, then one more
    Insert {
        #[command(flatten)]
        run: RunArgs,
        #[arg(long, value_enum, default_value_t = OrderArg::BackOrder)]
        order: OrderArg,
    },
    /// one extract, then n more, from a heap of n + 1 random values
    Extract {
        #[command(flatten)]
        run: RunArgs,
    },
    /// build_from_array over n values
    Build {
        #[command(flatten)]
        run: RunArgs,
        #[arg(long, value_enum, default_value_t = OrderArg::Random)]
        order: OrderArg,
    },
    /// heap_sort over n + 1 random values
    Sort {
        #[command(flatten)]
        run: RunArgs,
    },
    /// every experiment, one output file each
    All {
        #[command(flatten)]
        run: RunArgs,
    },
    /// insert VALUES in order and write the heap as a DOT graph
    Dot {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
        #[arg(long)]
        output: PathBuf,
    },
}

#[derive(Args, Clone)]
pub struct RunArgs {
    #[arg(long, default_value_t = DEFAULT_START)]
    pub start: usize,
    #[arg(long, default_value_t = DEFAULT_END)]
    pub end: usize,
    #[arg(long, default_value_t = DEFAULT_INCREMENT)]
    pub increment: usize,
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,
    #[arg(long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,
}

impl RunArgs {
    pub fn config(&self) -> TimingConfig {
        TimingConfig {
            start: self.start,
            end: self.end,
            increment: self.increment,
            trials: self.trials,
            seed: self.seed,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OrderArg {
    Random,
    InOrder,
    BackOrder,
}

impl From<OrderArg> for DataOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Random => DataOrder::Random,
            OrderArg::InOrder => DataOrder::InOrder,
            OrderArg::BackOrder => DataOrder::BackOrder,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Jsonl,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Jsonl => OutputFormat::JsonLines,
        }
    }
}
