/// One base pair of one locus, as reported by `samtools depth -aa`.
///
/// `position` is a 1-based running index within the locus. Under `-aa` every
/// base of every locus is reported, so the index matches the position column
/// of the depth output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthRecord {
    pub locus: String,
    pub position: u64,
    pub depth: u64,
}

/// Per-base depth rows, grouped by locus; within a locus, positions are
/// contiguous and start at 1.
pub type DepthTable = Vec<DepthRecord>;

/// One distinct observed insert size and how often it was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertSizeRecord {
    pub size: i64,
    pub frequency: u64,
}

/// Insert-size frequency rows, unique by size, in input order.
pub type InsertSizeTable = Vec<InsertSizeRecord>;

/// Flattens a frequency table into the sample it describes: each size
/// repeated `frequency` times. The result length equals the total frequency.
pub fn expand(table: &InsertSizeTable) -> Vec<i64> {
    let total: u64 = table.iter().map(|row| row.frequency).sum();
    let mut sample = Vec::with_capacity(total as usize);
    for row in table {
        sample.extend(std::iter::repeat(row.size).take(row.frequency as usize));
    }
    sample
}

/// The contiguous block of rows belonging to `locus`. Depth tables are
/// grouped by locus, so a single slice covers the whole locus.
pub fn locus_block<'a>(table: &'a DepthTable, locus: &str) -> &'a [DepthRecord] {
    let begin = match table.iter().position(|row| row.locus == locus) {
        Some(index) => index,
        None => return &[],
    };
    let len = table[begin..]
        .iter()
        .take_while(|row| row.locus == locus)
        .count();
    &table[begin..begin + len]
}

/// Distinct locus names, sorted.
pub fn loci(table: &DepthTable) -> Vec<String> {
    let mut names: Vec<String> = table.iter().map(|row| row.locus.clone()).collect();
    names.sort();
    names.dedup();
    names
}
