use crate::types::{InsertSizeRecord, InsertSizeTable};

/// Reduces a frequency table to the most frequent sizes whose cumulative
/// weight reaches `centile` percent of the total, re-sorted by size.
///
/// Accumulation is greedy over the frequency-descending order, not a
/// minimum-cardinality subset; downstream output depends on this exact
/// behavior. Ties keep their input order (stable sort).
pub fn trim_percentile(table: &InsertSizeTable, centile: u32) -> InsertSizeTable {
    let total: u64 = table.iter().map(|row| row.frequency).sum();
    let target = (centile as f64 / 100.0) * total as f64;

    let mut by_weight: Vec<&InsertSizeRecord> = table.iter().collect();
    by_weight.sort_by(|a, b| b.frequency.cmp(&a.frequency));

    let mut kept = InsertSizeTable::new();
    let mut cumulative = 0u64;
    for row in by_weight {
        kept.push(row.clone());
        cumulative += row.frequency;
        if cumulative as f64 >= target {
            break;
        }
    }
    kept.sort_by_key(|row| row.size);
    kept
}
