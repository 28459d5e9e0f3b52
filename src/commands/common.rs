use crate::percentile::trim_percentile;
use crate::stats::{summarize, StatSummary};
use crate::types::{expand, InsertSizeTable};

/// Shared insert-size path: apply the optional centile trim, then expand
/// the surviving table and summarize it. Every mode that reports insert
/// sizes goes through here, so `--centile` behaves the same in all of them.
///
/// Returns the (possibly trimmed) table alongside its summary; `None` when
/// the table is empty.
pub fn insert_size_summary(
    table: InsertSizeTable,
    centile: Option<u32>,
) -> Option<(InsertSizeTable, StatSummary)> {
    let table = match centile {
        Some(centile) => trim_percentile(&table, centile),
        None => table,
    };
    let summary = summarize(&expand(&table))?;
    Some((table, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InsertSizeRecord;

    fn table() -> InsertSizeTable {
        vec![
            InsertSizeRecord { size: 100, frequency: 2 },
            InsertSizeRecord { size: 200, frequency: 10 },
            InsertSizeRecord { size: 900, frequency: 1 },
        ]
    }

    #[test]
    fn without_centile_the_full_table_is_summarized() {
        let (kept, summary) = insert_size_summary(table(), None).unwrap();
        assert_eq!(kept, table());
        assert_eq!(summary.total, 13);
        assert_eq!(summary.mode, 200);
    }

    #[test]
    fn centile_trims_before_summarizing() {
        // 90% of 13 = 11.7: the 900bp outlier is dropped and the summary
        // describes the trimmed distribution
        let (kept, summary) = insert_size_summary(table(), Some(90)).unwrap();
        let sizes: Vec<i64> = kept.iter().map(|row| row.size).collect();
        assert_eq!(sizes, vec![100, 200]);
        assert_eq!(summary.total, 12);
        assert_eq!(summary.q75, 200);
    }

    #[test]
    fn empty_table_yields_no_summary() {
        assert!(insert_size_summary(InsertSizeTable::new(), Some(95)).is_none());
        assert!(insert_size_summary(InsertSizeTable::new(), None).is_none());
    }
}
