use crate::error::PlotError;

/// Parses and validates a `start:end` sub-range against the sampling
/// interval.
///
/// Either side may be empty, meaning unbounded. A string without a colon is
/// treated as a bare start. The span between two bound sides must cover at
/// least one full interval. Runs before any depth data is loaded; the
/// locus-length check lives in [`check_coords_range`].
pub fn parse_coords(
    text: &str,
    interval: u64,
) -> Result<(Option<u64>, Option<u64>), PlotError> {
    let (start_text, end_text) = match text.split_once(':') {
        Some((start, end)) => (start, end),
        None => (text, ""),
    };
    let start = parse_side(start_text)?;
    let end = parse_side(end_text)?;

    if let (Some(start), Some(end)) = (start, end) {
        if end.saturating_sub(start) / interval < 1 {
            return Err(PlotError::SpanTooSmall);
        }
    }
    Ok((start, end))
}

/// The end coordinate may not exceed the locus length. Enforced once the
/// depth table is loaded and the locus's record count is known.
pub fn check_coords_range(end: Option<u64>, locus_length: u64) -> Result<(), PlotError> {
    if let Some(end) = end {
        if end > locus_length {
            return Err(PlotError::CoordinateOutOfRange(end));
        }
    }
    Ok(())
}

fn parse_side(text: &str) -> Result<Option<u64>, PlotError> {
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<u64>()
        .map(Some)
        .map_err(|_| PlotError::InvalidCoordinateFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_range_is_returned_unchanged() {
        let parsed = parse_coords("1000:3000", 1000).unwrap();
        assert_eq!(parsed, (Some(1000), Some(3000)));
    }

    #[test]
    fn span_smaller_than_interval_is_rejected() {
        let err = parse_coords("1000:1200", 1000).unwrap_err();
        assert_eq!(err, PlotError::SpanTooSmall);
    }

    #[test]
    fn span_equal_to_interval_is_accepted() {
        let parsed = parse_coords("1000:2000", 1000).unwrap();
        assert_eq!(parsed, (Some(1000), Some(2000)));
    }

    #[test]
    fn empty_sides_are_unbounded() {
        assert_eq!(parse_coords(":", 100).unwrap(), (None, None));
        assert_eq!(parse_coords("250:", 100).unwrap(), (Some(250), None));
        assert_eq!(parse_coords(":900", 100).unwrap(), (None, Some(900)));
    }

    #[test]
    fn missing_colon_is_a_bare_start() {
        assert_eq!(parse_coords("750", 100).unwrap(), (Some(750), None));
    }

    #[test]
    fn non_numeric_side_is_a_format_error() {
        let err = parse_coords("abc:100", 100).unwrap_err();
        assert_eq!(err, PlotError::InvalidCoordinateFormat);
        let err = parse_coords("100:xyz", 100).unwrap_err();
        assert_eq!(err, PlotError::InvalidCoordinateFormat);
    }

    #[test]
    fn end_beyond_locus_length_is_out_of_range() {
        let err = check_coords_range(Some(6000), 5000).unwrap_err();
        assert_eq!(err, PlotError::CoordinateOutOfRange(6000));
    }

    #[test]
    fn end_within_locus_length_passes() {
        assert!(check_coords_range(Some(5000), 5000).is_ok());
        assert!(check_coords_range(None, 0).is_ok());
    }

    #[test]
    fn inverted_range_is_rejected_as_too_small() {
        let err = parse_coords("3000:1000", 100).unwrap_err();
        assert_eq!(err, PlotError::SpanTooSmall);
    }
}
