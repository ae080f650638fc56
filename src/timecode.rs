//! Timecode parsing and formatting.
//!
//! Transcript lines address the original media with `HH:MM:SS.mmm` timecodes
//! (zero-padded, millisecond precision). Parsing is slightly more permissive
//! than formatting: the short `MM:SS.mmm` form and 1-3 fractional digits are
//! accepted on input, while output is always the canonical 2/2/2/3 form.

/// Parse a timecode string into seconds.
///
/// Accepts `HH:MM:SS`, `MM:SS`, each with an optional `.m`/`.mm`/`.mmm`
/// fraction on the seconds field. Returns `None` for anything else.
pub fn parse_timecode(value: &str) -> Option<f64> {
    let parts: Vec<&str> = value.trim().split(':').collect();

    let (hours, minutes, seconds) = match parts.as_slice() {
        [h, m, s] => (*h, *m, *s),
        [m, s] => ("0", *m, *s),
        _ => return None,
    };

    let hours: u64 = parse_digits(hours)?;
    let minutes: u64 = parse_digits(minutes)?;
    let seconds = parse_seconds(seconds)?;

    Some((hours * 3600 + minutes * 60) as f64 + seconds)
}

/// Format seconds as a canonical `HH:MM:SS.mmm` timecode.
///
/// Negative inputs clamp to zero. Sub-millisecond remainders are rounded,
/// so `parse_timecode(format_timecode(t))` is exact to the millisecond.
pub fn format_timecode(time: f64) -> String {
    let total_ms = (time.max(0.0) * 1000.0).round() as u64;

    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let seconds = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;

    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}

fn parse_digits(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

fn parse_seconds(field: &str) -> Option<f64> {
    match field.split_once('.') {
        Some((whole, fraction)) => {
            if fraction.is_empty() || fraction.len() > 3 {
                return None;
            }
            let whole = parse_digits(whole)?;
            // Right-pad to milliseconds: ".5" means 500ms, not 5ms.
            let millis = parse_digits(&format!("{fraction:0<3}"))?;
            Some(whole as f64 + millis as f64 / 1000.0)
        }
        None => Some(parse_digits(field)? as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_timecode() {
        assert_eq!(parse_timecode("00:00:01.000"), Some(1.0));
        assert_eq!(parse_timecode("00:00:02.500"), Some(2.5));
        assert_eq!(parse_timecode("01:02:03.004"), Some(3723.004));
    }

    #[test]
    fn parses_short_form() {
        assert_eq!(parse_timecode("01:30"), Some(90.0));
        assert_eq!(parse_timecode("02:05.250"), Some(125.25));
    }

    #[test]
    fn parses_partial_fraction_digits() {
        // ".5" is half a second, not five milliseconds
        assert_eq!(parse_timecode("00:00:01.5"), Some(1.5));
        assert_eq!(parse_timecode("00:00:01.25"), Some(1.25));
    }

    #[test]
    fn rejects_malformed_timecodes() {
        assert_eq!(parse_timecode(""), None);
        assert_eq!(parse_timecode("12"), None);
        assert_eq!(parse_timecode("a:b:c"), None);
        assert_eq!(parse_timecode("00:00:01.1234"), None);
        assert_eq!(parse_timecode("00:00:1."), None);
        assert_eq!(parse_timecode("1:2:3:4"), None);
        assert_eq!(parse_timecode("-00:00:01.000"), None);
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format_timecode(0.0), "00:00:00.000");
        assert_eq!(format_timecode(1.0), "00:00:01.000");
        assert_eq!(format_timecode(2.5), "00:00:02.500");
        assert_eq!(format_timecode(3723.004), "01:02:03.004");
    }

    #[test]
    fn format_clamps_negative_to_zero() {
        assert_eq!(format_timecode(-3.0), "00:00:00.000");
    }

    #[test]
    fn round_trip_is_millisecond_exact() {
        for &t in &[0.0, 0.001, 1.48, 2.12, 59.999, 60.0, 3599.5, 3600.0] {
            let formatted = format_timecode(t);
            let parsed = parse_timecode(&formatted).unwrap();
            assert!((parsed - t).abs() < 0.0005, "{t} -> {formatted} -> {parsed}");
        }
    }
}
