use crate::error::PlotError;

const BAR: char = '\u{2588}';

/// Columns reserved next to each bar for the key and count.
const LABEL_MARGIN: u16 = 20;

/// Renders a frequency table as horizontal bars scaled to the terminal.
///
/// Rows are emitted in ascending key order. Bars are scaled against the
/// maximum count of the rows passed in, so upstream trimming or sampling
/// changes the visual scale.
pub fn render_histogram(
    rows: &[(i64, u64)],
    terminal_width: u16,
) -> Result<Vec<String>, PlotError> {
    if terminal_width <= LABEL_MARGIN {
        return Err(PlotError::TerminalTooNarrow);
    }
    let bar_width = (terminal_width - LABEL_MARGIN) as f64;

    let mut rows = rows.to_vec();
    rows.sort_by_key(|&(key, _)| key);
    let max_count = rows.iter().map(|&(_, count)| count).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len());
    for (key, count) in rows {
        let bar_len = if max_count == 0 {
            0
        } else {
            ((count as f64 / max_count as f64) * bar_width) as usize
        };
        let bar: String = std::iter::repeat(BAR).take(bar_len).collect();
        lines.push(format!("{} {} {}", key, bar, count));
    }
    Ok(lines)
}
