use crate::cli::Args;
use crate::coords::{check_coords_range, parse_coords};
use crate::error::PlotError;
use crate::histogram::render_histogram;
use crate::report;
use crate::sampling::sample_interval;
use crate::samtools;
use crate::stats::{summarize, StatSummary};
use crate::types::{loci, locus_block};
use crate::utils::progress::ProgressManager;
use crate::utils::terminal::terminal_width;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::io::{self, Write};

/// `--plot depth`: per-locus depth histograms plus per-locus and aggregate
/// depth statistics.
pub fn run(args: &Args) -> Result<()> {
    // Flag preconditions fail before samtools walks the whole BAM; only the
    // end-vs-locus-length check has to wait for the table.
    let (start, end) = validate_flags(args)?;

    samtools::check_samtools()?;

    let progress = ProgressManager::new();
    let spinner = progress.add_spinner("Calculating read depths and plotting histograms ...");
    let table = samtools::run_depth(&args.input)?;
    spinner.finish_and_clear();

    let loci_names = match &args.locus {
        Some(locus) => vec![locus.clone()],
        None => loci(&table),
    };

    if args.coords.is_some() {
        // Coordinates always come with --locus, so the length check runs
        // against that single named locus.
        let locus = args.locus.as_deref().unwrap_or_default();
        check_coords_range(end, locus_block(&table, locus).len() as u64)?;
    }

    let width = terminal_width();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // BTreeMap keeps the final stats blocks in sorted key order; the "All"
    // aggregate sorts in with the locus names.
    let mut results: BTreeMap<String, StatSummary> = BTreeMap::new();

    for locus in &loci_names {
        report::banner(&mut out)?;
        writeln!(out, "LOCUS:\t{}", locus)?;
        report::banner(&mut out)?;

        let sampled = sample_interval(&table, locus, start, end, args.interval)?;
        let rows: Vec<(i64, u64)> = sampled
            .iter()
            .map(|row| (row.position as i64, row.depth))
            .collect();
        for line in render_histogram(&rows, width)? {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;

        // Stats cover the full locus, not the sampled subset.
        let depths: Vec<i64> = locus_block(&table, locus)
            .iter()
            .map(|row| row.depth as i64)
            .collect();
        let summary = summarize(&depths)
            .with_context(|| format!("no depth records for locus '{locus}'"))?;
        results.insert(locus.clone(), summary);
    }

    let depths: Vec<i64> = table.iter().map(|row| row.depth as i64).collect();
    let all = summarize(&depths).context("no depth records in BAM")?;
    results.insert("All".to_string(), all);

    for (locus, summary) in &results {
        report::write_read_depth_stats(&mut out, locus, summary)?;
    }
    Ok(())
}

/// Preconditions that need no depth data: `--coords` requires `--locus`,
/// and the coordinate string must be well-formed with a span covering at
/// least one interval.
fn validate_flags(args: &Args) -> Result<(Option<u64>, Option<u64>), PlotError> {
    match &args.coords {
        Some(coords) => {
            if args.locus.is_none() {
                return Err(PlotError::MissingLocusFlag);
            }
            parse_coords(coords, args.interval)
        }
        None => Ok((None, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PlotKind;

    fn depth_args(locus: Option<&str>, coords: Option<&str>) -> Args {
        Args {
            input: "snps.bam".to_string(),
            plot: Some(PlotKind::Depth),
            centile: None,
            locus: locus.map(str::to_string),
            coords: coords.map(str::to_string),
            interval: 1000,
        }
    }

    #[test]
    fn coords_without_locus_fail_before_anything_runs() {
        let err = validate_flags(&depth_args(None, Some("1000:3000"))).unwrap_err();
        assert_eq!(err, PlotError::MissingLocusFlag);
    }

    #[test]
    fn coords_with_locus_are_parsed() {
        let parsed = validate_flags(&depth_args(Some("chr1"), Some("1000:3000"))).unwrap();
        assert_eq!(parsed, (Some(1000), Some(3000)));
    }

    #[test]
    fn malformed_coords_fail_before_anything_runs() {
        let err = validate_flags(&depth_args(Some("chr1"), Some("a:b"))).unwrap_err();
        assert_eq!(err, PlotError::InvalidCoordinateFormat);
        let err = validate_flags(&depth_args(Some("chr1"), Some("1000:1200"))).unwrap_err();
        assert_eq!(err, PlotError::SpanTooSmall);
    }

    #[test]
    fn no_coords_means_unbounded() {
        let parsed = validate_flags(&depth_args(Some("chr1"), None)).unwrap();
        assert_eq!(parsed, (None, None));
    }
}
