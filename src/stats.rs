use std::collections::HashMap;

/// Summary statistics over a numeric sample.
///
/// Mode, median and quartiles are reported truncated toward zero, matching
/// the banner output format. `median` and `q50` are always equal.
#[derive(Debug, Clone, PartialEq)]
pub struct StatSummary {
    pub total: usize,
    pub mode: i64,
    pub mean: f64,
    pub median: i64,
    pub q25: i64,
    pub q50: i64,
    pub q75: i64,
}

/// Computes count/mode/mean/median/quartile statistics over a flat sample.
///
/// Insert sizes arrive here as the expanded sample (each size repeated by
/// its frequency); depth tables pass their depth column directly, one value
/// per position. Returns `None` for an empty sample.
pub fn summarize(values: &[i64]) -> Option<StatSummary> {
    if values.is_empty() {
        return None;
    }
    let total = values.len();
    let mean = values.iter().map(|&value| value as f64).sum::<f64>() / total as f64;

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    // Truncation toward zero, not rounding: 2.5 reports as 2.
    let q25 = quantile(&sorted, 0.25) as i64;
    let q50 = quantile(&sorted, 0.5) as i64;
    let q75 = quantile(&sorted, 0.75) as i64;

    Some(StatSummary {
        total,
        mode: unique_mode(values),
        mean,
        median: q50,
        q25,
        q50,
        q75,
    })
}

/// Linear-interpolation quantile over a sorted sample.
fn quantile(sorted: &[i64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;
    sorted[lower] as f64 + fraction * (sorted[upper] - sorted[lower]) as f64
}

/// The most frequent value, or 0 when the maximum frequency is shared by
/// more than one value. The zero fallback is load-bearing: a bimodal sample
/// reports 0, never an arbitrary pick among the ties.
fn unique_mode(values: &[i64]) -> i64 {
    let mut counts: HashMap<i64, u64> = HashMap::new();
    for &value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    let max = match counts.values().copied().max() {
        Some(max) => max,
        None => return 0,
    };
    let mut modes = counts
        .iter()
        .filter(|(_, &count)| count == max)
        .map(|(&value, _)| value);
    match (modes.next(), modes.next()) {
        (Some(mode), None) => mode,
        _ => 0,
    }
}
