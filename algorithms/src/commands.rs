use std::fs;

use anyhow::{Context, Result};
use heap_algorithms::timing::{TimingHarness, TimingReport};
use heap_algorithms::Heap;
use tracing::info;

use crate::cli::{Command, RunArgs};

pub fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Insert { run, order } => {
            let report = harness(&run)?.insert(order.into());
            write_report(&report, &run)
        }
        Command::Extract { run } => {
            let report = harness(&run)?.extract()?;
            write_report(&report, &run)
        }
        Command::Build { run, order } => {
            let report = harness(&run)?.build(order.into());
            write_report(&report, &run)
        }
        Command::Sort { run } => {
            let report = harness(&run)?.sort();
            write_report(&report, &run)
        }
        Command::All { run } => {
            for report in harness(&run)?.run_all()? {
                write_report(&report, &run)?;
            }
            Ok(())
        }
        Command::Dot { values, output } => {
            let mut heap: Heap<i64> = Heap::new();
            heap.extend(values);
            fs::write(&output, heap.to_dot())
                .with_context(|| format!("writing {}", output.display()))?;
            info!(path = %output.display(), len = heap.len(), "dot file written");
            Ok(())
        }
    }
}

fn harness(run: &RunArgs) -> Result<TimingHarness> {
    let harness = TimingHarness::new(run.config()).context("invalid timing configuration")?;
    info!(config = ?harness.config(), "starting timing run");
    Ok(harness)
}

fn write_report(report: &TimingReport, run: &RunArgs) -> Result<()> {
    let format = run.format.into();
    fs::create_dir_all(&run.out_dir)
        .with_context(|| format!("creating {}", run.out_dir.display()))?;
    let path = run.out_dir.join(report.file_name(format));
    let body = report
        .render(format)
        .with_context(|| format!("rendering {} report", report.experiment))?;
    fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), rows = report.rows.len(), "report written");
    Ok(())
}
