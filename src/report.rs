use crate::stats::StatSummary;
use std::io::{self, Write};

const BANNER_WIDTH: usize = 40;

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(BANNER_WIDTH))
}

/// Means keep a decimal point even when whole, so 2 reports as 2.0.
fn format_mean(mean: f64) -> String {
    if mean.fract() == 0.0 {
        format!("{:.1}", mean)
    } else {
        mean.to_string()
    }
}

/// Insert-size stats block in the fixed banner format.
pub fn write_insert_size_stats(out: &mut impl Write, stats: &StatSummary) -> io::Result<()> {
    banner(out)?;
    writeln!(out, "    Total read pairs:    {}", stats.total)?;
    writeln!(out, "    Insert size MODE:    {}", stats.mode)?;
    writeln!(out, "                MEAN:    {}", format_mean(stats.mean))?;
    writeln!(out, "              MEDIAN:    {}", stats.median)?;
    writeln!(
        out,
        "         Q25 Q50 Q75:    {} {} {}\n",
        stats.q25, stats.q50, stats.q75
    )
}

/// Read-depth stats block for one locus (or the `All` aggregate).
pub fn write_read_depth_stats(
    out: &mut impl Write,
    locus: &str,
    stats: &StatSummary,
) -> io::Result<()> {
    banner(out)?;
    writeln!(out, "    Ref genome locus:    {}", locus)?;
    writeln!(out, "     Locus size (bp):    {}", stats.total)?;
    writeln!(out, "     Read depth MEAN:    {}", format_mean(stats.mean))?;
    writeln!(out, "              MEDIAN:    {}", stats.median)?;
    writeln!(
        out,
        "         Q25 Q50 Q75:    {} {} {}\n",
        stats.q25, stats.q50, stats.q75
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> StatSummary {
        StatSummary {
            total: 4,
            mode: 2,
            mean: 2.0,
            median: 2,
            q25: 1,
            q50: 2,
            q75: 2,
        }
    }

    #[test]
    fn insert_size_block_is_banner_framed() {
        let mut buffer = Vec::new();
        write_insert_size_stats(&mut buffer, &summary()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with(&"-".repeat(40)));
        assert!(text.contains("    Total read pairs:    4\n"));
        assert!(text.contains("    Insert size MODE:    2\n"));
        assert!(text.contains("         Q25 Q50 Q75:    1 2 2\n"));
    }

    #[test]
    fn whole_number_means_keep_their_decimal() {
        let mut buffer = Vec::new();
        write_insert_size_stats(&mut buffer, &summary()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("                MEAN:    2.0\n"));

        let mut stats = summary();
        stats.mean = 2.25;
        let mut buffer = Vec::new();
        write_read_depth_stats(&mut buffer, "chr1", &stats).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("     Read depth MEAN:    2.25\n"));
    }

    #[test]
    fn depth_block_names_the_locus() {
        let mut buffer = Vec::new();
        write_read_depth_stats(&mut buffer, "chr2", &summary()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("    Ref genome locus:    chr2\n"));
        assert!(text.contains("     Locus size (bp):    4\n"));
    }
}
