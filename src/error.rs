use thiserror::Error;

/// Failures raised by the plotting pipeline. All of them are terminal:
/// each aborts the run with a message on stderr and exit status 1.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlotError {
    /// A `--coords` side did not parse as an integer.
    #[error("please specify coordinates as start:end integers eg. --coords 1000:1200")]
    InvalidCoordinateFormat,

    /// A coordinate does not fall inside the selected locus.
    #[error("coordinate {0} is out of range for the selected locus")]
    CoordinateOutOfRange(u64),

    /// The start..end span covers less than one sampling interval.
    #[error("coordinates span must be greater than the interval")]
    SpanTooSmall,

    /// The end coordinate exceeds the number of bases recorded for the locus.
    #[error("end coordinate is greater than the length of locus '{0}'")]
    LocusTooShort(String),

    /// `--coords` was given without `--locus`.
    #[error("please specify a locus with --locus")]
    MissingLocusFlag,

    /// Terminal narrower than the label margin reserved next to each bar.
    #[error("terminal is too narrow to draw a histogram")]
    TerminalTooNarrow,

    /// A required external tool is not on PATH.
    #[error("check \"{0}\" is installed correctly and in $PATH")]
    MissingDependency(String),
}
