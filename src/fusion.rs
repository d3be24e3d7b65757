//! Affect fusion
//!
//! Combines biomarker statistics, ERD/ERS changes, and the P300 response
//! into the four normalized affect scores via fixed weighted formulas. The
//! weights are heuristic, tuned against pilot recordings; they are not
//! clinically validated.
//!
//! Every score is clamped to [0, 1]. When the biomarker sequence is empty
//! the scores fall back to the neutral 0.5 prior.

use crate::features::HrvSummary;
use crate::types::BiomarkerSample;

/// Cognitive engagement from the beta/alpha ratio plus beta synchronization.
///
/// Per-sample beta/alpha ratios are accumulated only where mean alpha is
/// positive, but averaged over the full sequence length, so alpha-silent
/// samples pull the score down rather than dropping out.
pub fn engagement(biomarkers: &[BiomarkerSample], ers_beta: f64) -> f64 {
    if biomarkers.is_empty() {
        return 0.5;
    }

    let ratio_sum: f64 = biomarkers
        .iter()
        .map(|b| {
            let avg_alpha = (b.fp1_alpha + b.fp2_alpha) / 2.0;
            let avg_beta = (b.fp1_beta + b.fp2_beta) / 2.0;
            if avg_alpha > 0.0 {
                avg_beta / avg_alpha
            } else {
                0.0
            }
        })
        .sum();
    let beta_alpha_ratio = ratio_sum / biomarkers.len() as f64;

    (beta_alpha_ratio * 0.7 + (ers_beta / 100.0) * 0.3).clamp(0.0, 1.0)
}

/// Physiological arousal from beta power, heart rate, and band dynamics.
///
/// Beta is normalized against a 0-30% range, heart rate against 60-120 bpm.
pub fn arousal(biomarkers: &[BiomarkerSample], erd_alpha: f64, ers_beta: f64) -> f64 {
    if biomarkers.is_empty() {
        return 0.5;
    }

    let count = biomarkers.len() as f64;
    let avg_heart_rate = biomarkers.iter().map(|b| b.heartbeat_bpm).sum::<f64>() / count;
    let norm_heart_rate = (avg_heart_rate - 60.0) / 60.0;

    let avg_beta = biomarkers
        .iter()
        .map(|b| (b.fp1_beta + b.fp2_beta) / 2.0)
        .sum::<f64>()
        / count;
    let norm_beta = avg_beta / 30.0;

    (norm_beta * 0.4 + norm_heart_rate * 0.3 + (erd_alpha / 100.0) * 0.15 + (ers_beta / 100.0) * 0.15)
        .clamp(0.0, 1.0)
}

/// Emotional positivity from frontal alpha asymmetry and HRV.
///
/// Greater left (Fp1) than right (Fp2) alpha is read as positive affect;
/// the asymmetry is normalized over a typical -10..+10 range. Higher RMSSD
/// and a lower (more parasympathetic) LF/HF ratio both raise valence.
pub fn valence(biomarkers: &[BiomarkerSample], hrv: &HrvSummary) -> f64 {
    if biomarkers.is_empty() {
        return 0.5;
    }

    let avg_asymmetry = biomarkers
        .iter()
        .map(|b| b.fp1_alpha - b.fp2_alpha)
        .sum::<f64>()
        / biomarkers.len() as f64;
    let norm_asymmetry = (avg_asymmetry + 10.0) / 20.0;

    let norm_hrv = (hrv.rmssd / 200.0).min(1.0);
    let norm_lf_hf = (1.0 - hrv.lf_hf / 3.0).max(0.0);

    (norm_asymmetry * 0.4 + norm_hrv * 0.35 + norm_lf_hf * 0.25).clamp(0.0, 1.0)
}

/// Overall music preference fused from all affect dimensions.
///
/// The theta x RMSSD quadrant separates relaxed immersion (high/high) from
/// stressed intensity (high/low) and disengagement (low theta); the final
/// term rewards moderate arousal.
pub fn overall_preference(
    engagement: f64,
    arousal: f64,
    valence: f64,
    theta_level: f64,
    p300: f64,
    hrv: &HrvSummary,
) -> f64 {
    let theta_hrv_score = match (theta_level > 0.5, hrv.rmssd > 50.0) {
        (true, true) => 0.8,
        (true, false) => 0.6,
        (false, true) => 0.4,
        (false, false) => 0.2,
    };

    let preference = valence * 0.30
        + engagement * 0.20
        + theta_hrv_score * 0.20
        + p300 * 0.15
        + (1.0 - (arousal - 0.5).abs()) * 0.15;

    preference.clamp(0.0, 1.0)
}
