use crate::error::PlotError;
use crate::types::{locus_block, DepthRecord, DepthTable};

/// Down-samples one locus's depth rows to one row every `interval`
/// positions, optionally bounded by validated start/end coordinates.
///
/// Boundaries are resolved by value: the row whose position equals the
/// coordinate marks the slice edge. Direct offset arithmetic would silently
/// shift results if the position sequence ever had gaps. When `end` is set
/// the slice is inclusive of the located end row.
pub fn sample_interval(
    table: &DepthTable,
    locus: &str,
    start: Option<u64>,
    end: Option<u64>,
    interval: u64,
) -> Result<Vec<DepthRecord>, PlotError> {
    let block = locus_block(table, locus);

    if let Some(end) = end {
        if (block.len() as u64) < end {
            return Err(PlotError::LocusTooShort(locus.to_string()));
        }
    }

    // Unset start skips the first interval-1 rows so the first sample lands
    // on the interval boundary.
    let start_offset = match start {
        Some(value) => position_offset(block, value)?,
        None => (interval - 1) as usize,
    };
    let end_offset = match end {
        Some(value) => position_offset(block, value)? + 1,
        None => block.len(),
    };

    let end_offset = end_offset.min(block.len());
    let start_offset = start_offset.min(end_offset);

    Ok(block[start_offset..end_offset]
        .iter()
        .step_by(interval as usize)
        .cloned()
        .collect())
}

fn position_offset(block: &[DepthRecord], value: u64) -> Result<usize, PlotError> {
    block
        .iter()
        .position(|row| row.position == value)
        .ok_or(PlotError::CoordinateOutOfRange(value))
}
