//! Device export parsers
//!
//! The headband produces three tab-separated exports per session: a raw
//! EEG/PPG time series, per-channel FFT power tables, and a biomarker table.
//! Each parser maps one export to a typed sample sequence.
//!
//! Parsing is deliberately lenient: devices produce imperfect logs, so a row
//! that fails its minimum-field check is dropped and parsing continues, and a
//! numeric field that fails to parse becomes 0.0 rather than invalidating the
//! row. No per-row error ever propagates.

mod biomarkers;
mod raw;
mod spectral;
pub mod timecode;

pub use biomarkers::parse_biomarkers;
pub use raw::parse_raw_data;
pub use spectral::parse_spectral_data;

/// Non-blank data lines of an export, header excluded.
fn data_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .skip(1)
}

/// Required numeric field: unparseable or absent values become 0.0.
fn field(parts: &[&str], index: usize) -> f64 {
    parts
        .get(index)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0.0)
}

/// Optional trailing field: present only when the column exists, is
/// non-empty, and parses.
fn optional_field(parts: &[&str], index: usize) -> Option<f64> {
    parts
        .get(index)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_data_lines_skips_header_and_blanks() {
        let content = "time\tv\n\n1:00:00\t1\n   \n1:00:01\t2\n";
        let lines: Vec<&str> = data_lines(content).collect();
        assert_eq!(lines, vec!["1:00:00\t1", "1:00:01\t2"]);
    }

    #[test]
    fn test_field_coercion() {
        let parts = vec!["12:00:00", "1.5", "garbage", ""];
        assert_eq!(field(&parts, 1), 1.5);
        assert_eq!(field(&parts, 2), 0.0);
        assert_eq!(field(&parts, 3), 0.0);
        assert_eq!(field(&parts, 9), 0.0);
    }

    #[test]
    fn test_optional_field() {
        let parts = vec!["12:00:00", "3.2", "", "bad"];
        assert_eq!(optional_field(&parts, 1), Some(3.2));
        assert_eq!(optional_field(&parts, 2), None);
        assert_eq!(optional_field(&parts, 3), None);
        assert_eq!(optional_field(&parts, 9), None);
    }
}
