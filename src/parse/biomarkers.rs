//! Biomarker-table parser
//!
//! Expected columns: time, five band percentages for Fp1, five for Fp2,
//! heartbeat BPM, SDNN, RMSSD, then optional VLF/LF/HF columns that only
//! newer firmware emits.

use chrono::Local;

use super::{data_lines, field, optional_field, timecode};
use crate::types::BiomarkerSample;

/// Parse a biomarker export into ordered samples.
///
/// Rows with fewer than 14 tab-separated fields are dropped; the three HRV
/// frequency-domain columns are optional per row.
pub fn parse_biomarkers(content: &str) -> Vec<BiomarkerSample> {
    data_lines(content).filter_map(parse_row).collect()
}

fn parse_row(line: &str) -> Option<BiomarkerSample> {
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() < 14 {
        return None;
    }

    let timestamp =
        timecode::parse_timecode(parts[0]).unwrap_or_else(|| Local::now().time());

    Some(BiomarkerSample {
        timestamp,
        fp1_delta: field(&parts, 1),
        fp1_theta: field(&parts, 2),
        fp1_alpha: field(&parts, 3),
        fp1_beta: field(&parts, 4),
        fp1_gamma: field(&parts, 5),
        fp2_delta: field(&parts, 6),
        fp2_theta: field(&parts, 7),
        fp2_alpha: field(&parts, 8),
        fp2_beta: field(&parts, 9),
        fp2_gamma: field(&parts, 10),
        heartbeat_bpm: field(&parts, 11),
        sdnn: field(&parts, 12),
        rmssd: field(&parts, 13),
        vlf: optional_field(&parts, 14),
        lf: optional_field(&parts, 15),
        hf: optional_field(&parts, 16),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "Time\tFp1D\tFp1T\tFp1A\tFp1B\tFp1G\tFp2D\tFp2T\tFp2A\tFp2B\tFp2G\tBPM\tSDNN\tRMSSD\n";

    #[test]
    fn test_fourteen_column_row() {
        let content = format!(
            "{HEADER}10:00:00\t5\t40\t20\t15\t5\t6\t38\t22\t14\t4\t72\t45\t55\n"
        );
        let samples = parse_biomarkers(&content);

        assert_eq!(samples.len(), 1);
        let b = &samples[0];
        assert_eq!(b.fp1_theta, 40.0);
        assert_eq!(b.fp2_alpha, 22.0);
        assert_eq!(b.heartbeat_bpm, 72.0);
        assert_eq!(b.rmssd, 55.0);
        assert_eq!(b.vlf, None);
        assert_eq!(b.lf, None);
        assert_eq!(b.hf, None);
    }

    #[test]
    fn test_optional_hrv_columns() {
        let content = format!(
            "{HEADER}10:00:00\t5\t40\t20\t15\t5\t6\t38\t22\t14\t4\t72\t45\t55\t120\t300\t150\n"
        );
        let samples = parse_biomarkers(&content);

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].vlf, Some(120.0));
        assert_eq!(samples[0].lf, Some(300.0));
        assert_eq!(samples[0].hf, Some(150.0));
    }

    #[test]
    fn test_short_row_dropped() {
        let content = format!(
            "{HEADER}10:00:00\t5\t40\t20\n\
             10:00:01\t5\t40\t20\t15\t5\t6\t38\t22\t14\t4\t72\t45\t55\n"
        );
        let samples = parse_biomarkers(&content);

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].fp1_theta, 40.0);
    }

    #[test]
    fn test_garbled_field_defaults_to_zero() {
        let content = format!(
            "{HEADER}10:00:00\t5\t??\t20\t15\t5\t6\t38\t22\t14\t4\t72\t45\t55\n"
        );
        let samples = parse_biomarkers(&content);

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].fp1_theta, 0.0);
        assert_eq!(samples[0].fp1_alpha, 20.0);
    }
}
