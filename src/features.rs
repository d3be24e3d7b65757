//! Biomarker and time-domain feature extraction
//!
//! This module derives the scalar features consumed by affect fusion:
//! - Theta level (emotional immersion vs boredom)
//! - HRV summary (SDNN/RMSSD means and the LF/HF sympathovagal ratio)
//! - P300 amplitude (attention/recognition response)

use crate::types::{BiomarkerSample, RawSample};

/// Normalization threshold for P300 amplitude in microvolts; the upper end
/// of the typical P300 response range.
pub const P300_AMPLITUDE_THRESHOLD_UV: f64 = 0.0005;

/// P300 search window in sample indices, approximating 250-350 ms
/// post-stimulus at the device's nominal ~200 Hz rate. Fixed parameter, not
/// derived from the actual timestamps.
const P300_WINDOW: std::ops::Range<usize> = 50..70;

/// HRV summary statistics over a biomarker sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HrvSummary {
    /// Mean SDNN (ms)
    pub sdnn: f64,
    /// Mean RMSSD (ms)
    pub rmssd: f64,
    /// Mean LF/HF ratio; 1.0 when no sample carries both bands
    pub lf_hf: f64,
}

/// Mean theta band percentage across both channels, normalized to 0-1.
///
/// Theta typically ranges 0-50%, so the mean is divided by 50 and clamped.
/// High theta indicates emotional immersion, low theta boredom. Empty input
/// yields the neutral 0.5.
pub fn theta_level(biomarkers: &[BiomarkerSample]) -> f64 {
    if biomarkers.is_empty() {
        return 0.5;
    }

    let avg_theta = biomarkers
        .iter()
        .map(|b| (b.fp1_theta + b.fp2_theta) / 2.0)
        .sum::<f64>()
        / biomarkers.len() as f64;

    (avg_theta / 50.0).clamp(0.0, 1.0)
}

/// Summarize heart-rate variability over the recording.
///
/// SDNN and RMSSD are plain arithmetic means. The LF/HF ratio is averaged
/// only over samples where both bands are present and HF is positive; when
/// no such sample exists it defaults to a balanced 1.0. Empty input yields
/// `{sdnn: 0, rmssd: 0, lf_hf: 1}`.
pub fn hrv_summary(biomarkers: &[BiomarkerSample]) -> HrvSummary {
    if biomarkers.is_empty() {
        return HrvSummary { sdnn: 0.0, rmssd: 0.0, lf_hf: 1.0 };
    }

    let count = biomarkers.len() as f64;
    let sdnn = biomarkers.iter().map(|b| b.sdnn).sum::<f64>() / count;
    let rmssd = biomarkers.iter().map(|b| b.rmssd).sum::<f64>() / count;

    let ratios: Vec<f64> = biomarkers
        .iter()
        .filter_map(|b| match (b.lf, b.hf) {
            (Some(lf), Some(hf)) if hf > 0.0 => Some(lf / hf),
            _ => None,
        })
        .collect();

    let lf_hf = if ratios.is_empty() {
        1.0
    } else {
        ratios.iter().sum::<f64>() / ratios.len() as f64
    };

    HrvSummary { sdnn, rmssd, lf_hf }
}

/// Peak P300 amplitude in the post-stimulus window, normalized to 0-1.
///
/// Scans samples [50, 70) of the raw series for the maximum mean absolute
/// voltage across both channels, then normalizes by the typical-amplitude
/// threshold. Recordings shorter than 50 samples yield 0.
pub fn p300_amplitude(raw: &[RawSample]) -> f64 {
    if raw.len() < P300_WINDOW.start {
        return 0.0;
    }

    let end = P300_WINDOW.end.min(raw.len());
    let mut max_amplitude: f64 = 0.0;

    for sample in &raw[P300_WINDOW.start..end] {
        let amplitude = (sample.eeg_fp1.abs() + sample.eeg_fp2.abs()) / 2.0;
        if amplitude > max_amplitude {
            max_amplitude = amplitude;
        }
    }

    (max_amplitude / P300_AMPLITUDE_THRESHOLD_UV).min(1.0)
}
