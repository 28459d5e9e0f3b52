use crate::cli::Args;
use crate::commands::common::insert_size_summary;
use crate::histogram::render_histogram;
use crate::report;
use crate::samtools;
use crate::utils::progress::ProgressManager;
use crate::utils::terminal::terminal_width;
use anyhow::{Context, Result};
use std::io::{self, Write};

/// `--plot insert`: insert-size histogram plus summary statistics.
///
/// With `--centile` the table is trimmed first; both the histogram and the
/// statistics then describe the trimmed distribution.
pub fn run(args: &Args) -> Result<()> {
    samtools::check_samtools()?;

    let progress = ProgressManager::new();
    let spinner = progress.add_spinner("Calculating insert size stats and plotting histogram ...");
    let table = samtools::run_stats(&args.input)?;
    spinner.finish_and_clear();

    let (table, summary) = insert_size_summary(table, args.centile)
        .context("no insert size rows in samtools stats output")?;

    let rows: Vec<(i64, u64)> = table.iter().map(|row| (row.size, row.frequency)).collect();
    let lines = render_histogram(&rows, terminal_width())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    report::write_insert_size_stats(&mut out, &summary)?;
    Ok(())
}
