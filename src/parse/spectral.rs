//! FFT power-table parser
//!
//! The header row names the frequency bins (e.g. "0.5", "1.0", ... "100.0");
//! each data row carries a time followed by the power at each bin. One export
//! exists per channel (Fp1 and Fp2).

use chrono::Local;
use std::collections::HashMap;

use super::timecode;
use crate::types::SpectralSample;

/// Parse an FFT power-table export into ordered samples.
///
/// The frequency labels are taken verbatim from the header; a data row is
/// paired with labels positionally, ignoring any surplus columns on either
/// side. Rows with fewer than 2 fields are dropped.
pub fn parse_spectral_data(content: &str) -> Vec<SpectralSample> {
    let lines: Vec<&str> = content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return Vec::new();
    }

    let labels: Vec<&str> = lines[0].split('\t').skip(1).map(str::trim).collect();

    lines[1..]
        .iter()
        .filter_map(|line| parse_row(line, &labels))
        .collect()
}

fn parse_row(line: &str, labels: &[&str]) -> Option<SpectralSample> {
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() < 2 {
        return None;
    }

    let timestamp =
        timecode::parse_timecode(parts[0]).unwrap_or_else(|| Local::now().time());

    let mut frequencies = HashMap::with_capacity(labels.len());
    for (label, value) in labels.iter().zip(parts.iter().skip(1)) {
        frequencies.insert(
            (*label).to_string(),
            value.trim().parse().unwrap_or(0.0),
        );
    }

    Some(SpectralSample {
        timestamp,
        frequencies,
    })
}
