//! Pipeline orchestration
//!
//! This module provides the main entry point for the affect engine. One
//! `analyze` call runs the full pipeline over the up-to-four session exports:
//! parsing → spectral and biomarker feature extraction → affect fusion.
//!
//! The pipeline is a one-shot, stateless transformation: the result is a
//! pure function of the input text (modulo the wall-clock fallback for rows
//! with unparseable timestamps, which does not feed any score).

use crate::bands::{self, erd_ers};
use crate::features::{hrv_summary, p300_amplitude, theta_level};
use crate::fusion;
use crate::parse::{parse_biomarkers, parse_raw_data, parse_spectral_data};
use crate::types::AnalysisResult;

/// Run the full signal-to-affect analysis over a session's exports.
///
/// All four inputs are optional; an absent input behaves as an empty sample
/// sequence and the features it would have fed degrade to their neutral
/// defaults. Never fails on well-formed (even if sparse or partially
/// garbled) text.
///
/// # Arguments
/// * `raw_text` - Raw EEG/PPG time-series export
/// * `fp1_fft_text` - FFT power table for the Fp1 channel
/// * `fp2_fft_text` - FFT power table for the Fp2 channel
/// * `biomarkers_text` - Biomarker table export
pub fn analyze(
    raw_text: Option<&str>,
    fp1_fft_text: Option<&str>,
    fp2_fft_text: Option<&str>,
    biomarkers_text: Option<&str>,
) -> AnalysisResult {
    let raw = raw_text.map(parse_raw_data).unwrap_or_default();
    let fp1_fft = fp1_fft_text.map(parse_spectral_data).unwrap_or_default();
    let fp2_fft = fp2_fft_text.map(parse_spectral_data).unwrap_or_default();
    let biomarkers = biomarkers_text.map(parse_biomarkers).unwrap_or_default();

    // ERD/ERS runs on a single channel: Fp1 when available, else Fp2
    let spectral = if !fp1_fft.is_empty() { &fp1_fft } else { &fp2_fft };

    let alpha = erd_ers(spectral, bands::ALPHA);
    let beta = erd_ers(spectral, bands::BETA);

    let theta_level = theta_level(&biomarkers);
    let hrv = hrv_summary(&biomarkers);
    let p300_amplitude = p300_amplitude(&raw);

    let engagement = fusion::engagement(&biomarkers, beta.ers);
    let arousal = fusion::arousal(&biomarkers, alpha.erd, beta.ers);
    let valence = fusion::valence(&biomarkers, &hrv);
    let overall_preference =
        fusion::overall_preference(engagement, arousal, valence, theta_level, p300_amplitude, &hrv);

    AnalysisResult {
        erd_alpha: alpha.erd,
        ers_alpha: alpha.ers,
        erd_beta: beta.erd,
        ers_beta: beta.ers,
        theta_level,
        sdnn: hrv.sdnn,
        rmssd: hrv.rmssd,
        lf_hf: hrv.lf_hf,
        p300_amplitude,
        engagement,
        arousal,
        valence,
        overall_preference,
    }
}
