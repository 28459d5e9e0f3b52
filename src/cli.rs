use clap::{Parser, ValueEnum};

/// Estimates and plots insert sizes and read depth coverage of
/// paired-end reads.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// BAM file eg. snps.bam from Snippy
    #[arg(value_name = "BAMFILE")]
    pub input: String,

    /// Plot insert sizes ("--plot insert") or read depth ("--plot depth");
    /// omit to print both stats blocks without histograms
    #[arg(long, value_enum, value_name = "insert|depth")]
    pub plot: Option<PlotKind>,

    /// Percentile filter for inserts eg. 95 = 95% most frequent insert sizes
    #[arg(long, value_name = "%", value_parser = clap::value_parser!(u32).range(1..=100))]
    pub centile: Option<u32>,

    /// Locus to display depth plots
    #[arg(long, value_name = "LOCUS")]
    pub locus: Option<String>,

    /// Locus coordinates to display depth plots
    #[arg(long, value_name = "START:END")]
    pub coords: Option<String>,

    /// Interval (in bp) to draw depth plots
    #[arg(long, value_name = "LEN", default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlotKind {
    Insert,
    Depth,
}
