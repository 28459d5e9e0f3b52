use crate::cli::Args;
use crate::commands::common::insert_size_summary;
use crate::report;
use crate::samtools;
use crate::stats::summarize;
use crate::utils::progress::ProgressManager;
use anyhow::{Context, Result};
use std::io::{self, Write};

/// Default mode (no `--plot`): both depth and insert-size stats blocks,
/// no histograms. `--centile` trims the insert-size table here exactly as
/// it does in insert mode.
pub fn run(args: &Args) -> Result<()> {
    samtools::check_samtools()?;

    let progress = ProgressManager::new();

    let spinner = progress.add_spinner("Calculating read depths ...");
    let depth_table = samtools::run_depth(&args.input)?;
    spinner.finish_and_clear();
    let depths: Vec<i64> = depth_table.iter().map(|row| row.depth as i64).collect();
    let depth_summary = summarize(&depths).context("no depth records in BAM")?;

    let spinner = progress.add_spinner("Calculating insert size stats ...");
    let insert_table = samtools::run_stats(&args.input)?;
    spinner.finish_and_clear();
    let (_, insert_summary) = insert_size_summary(insert_table, args.centile)
        .context("no insert size rows in samtools stats output")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_read_depth_stats(&mut out, "All", &depth_summary)?;
    report::write_insert_size_stats(&mut out, &insert_summary)?;
    Ok(())
}
