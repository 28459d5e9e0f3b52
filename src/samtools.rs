use crate::error::PlotError;
use crate::types::{DepthRecord, DepthTable, InsertSizeRecord, InsertSizeTable};
use anyhow::{bail, Context, Result};
use std::io::BufRead;
use std::process::Command;

/// Verifies samtools is installed and on PATH.
pub fn check_samtools() -> Result<()> {
    check_tool("samtools")
}

/// A tool counts as present only when its version probe both spawns and
/// exits successfully.
fn check_tool(tool: &str) -> Result<()> {
    let output = Command::new(tool)
        .arg("--version")
        .output()
        .map_err(|_| PlotError::MissingDependency(tool.to_string()))?;
    if !output.status.success() {
        return Err(PlotError::MissingDependency(tool.to_string()).into());
    }
    Ok(())
}

/// Runs `samtools depth -aa` and parses its per-base output. `-aa` reports
/// every position of every locus, including zero-coverage bases.
pub fn run_depth(bam: &str) -> Result<DepthTable> {
    let output = Command::new("samtools")
        .args(["depth", "-aa", bam])
        .output()
        .context("failed to run samtools depth")?;
    if !output.status.success() {
        bail!("samtools depth exited with {}", output.status);
    }
    parse_depth(output.stdout.as_slice())
}

/// Runs `samtools stats` and extracts the insert-size frequency table.
pub fn run_stats(bam: &str) -> Result<InsertSizeTable> {
    let output = Command::new("samtools")
        .args(["stats", bam])
        .output()
        .context("failed to run samtools stats")?;
    if !output.status.success() {
        bail!("samtools stats exited with {}", output.status);
    }
    parse_insert_sizes(output.stdout.as_slice())
}

/// Parses tab-separated `locus\tpos\tdepth` lines into a depth table.
///
/// The stored position is a running 1-based index restarted at each locus;
/// under `-aa` the depth output is contiguous, so the index matches the
/// position column.
pub fn parse_depth(reader: impl BufRead) -> Result<DepthTable> {
    let mut table = DepthTable::new();
    let mut current_locus: Option<String> = None;
    let mut position = 0u64;

    for line in reader.lines() {
        let line = line.context("failed to read samtools depth output")?;
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let locus = fields
            .next()
            .with_context(|| format!("missing locus field in depth line: {line:?}"))?;
        let depth: u64 = fields
            .nth(1)
            .with_context(|| format!("missing depth field in depth line: {line:?}"))?
            .parse()
            .with_context(|| format!("bad depth value in depth line: {line:?}"))?;

        if current_locus.as_deref() != Some(locus) {
            current_locus = Some(locus.to_string());
            position = 0;
        }
        position += 1;
        table.push(DepthRecord {
            locus: locus.to_string(),
            position,
            depth,
        });
    }
    Ok(table)
}

/// Keeps only the `IS` rows of `samtools stats` output: field 2 is the
/// insert size, field 3 its frequency. Every other line is ignored.
/// samtools emits one row per distinct size, so the table stays unique.
pub fn parse_insert_sizes(reader: impl BufRead) -> Result<InsertSizeTable> {
    let mut table = InsertSizeTable::new();
    for line in reader.lines() {
        let line = line.context("failed to read samtools stats output")?;
        let mut fields = line.split('\t');
        if fields.next() != Some("IS") {
            continue;
        }
        let size: i64 = fields
            .next()
            .with_context(|| format!("missing insert size in stats line: {line:?}"))?
            .parse()
            .with_context(|| format!("bad insert size in stats line: {line:?}"))?;
        let frequency: u64 = fields
            .next()
            .with_context(|| format!("missing frequency in stats line: {line:?}"))?
            .parse()
            .with_context(|| format!("bad frequency in stats line: {line:?}"))?;
        table.push(InsertSizeRecord { size, frequency });
    }
    Ok(table)
}
