//! Raw EEG/PPG time-series parser
//!
//! Expected columns: time, Fp1 (µV), Fp2 (µV), PPG. The header row is
//! ignored.

use chrono::Local;

use super::{data_lines, field, timecode};
use crate::types::RawSample;

/// Parse a raw time-series export into ordered samples.
///
/// Rows with fewer than 4 tab-separated fields are dropped. Rows whose time
/// field carries no recognizable timecode are stamped with the current
/// wall-clock time (see the timestamp-fallback note in DESIGN.md).
pub fn parse_raw_data(content: &str) -> Vec<RawSample> {
    data_lines(content).filter_map(parse_row).collect()
}

fn parse_row(line: &str) -> Option<RawSample> {
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() < 4 {
        return None;
    }

    let timestamp =
        timecode::parse_timecode(parts[0]).unwrap_or_else(|| Local::now().time());

    Some(RawSample {
        timestamp,
        eeg_fp1: field(&parts, 1),
        eeg_fp2: field(&parts, 2),
        ppg: field(&parts, 3),
    })
}
