//! Core types for the NeuroTune affect pipeline
//!
//! This module defines the data structures that flow through each stage of the
//! pipeline: parsed sample sequences, the fused analysis result, context
//! scores, and the JSON envelope returned to callers.
//!
//! All serialized field names are camelCase to stay wire-compatible with the
//! existing web API (`erdAlpha`, `overallPreference`, `contextScores`, ...).

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single raw EEG/PPG reading from the headband's time-series export.
///
/// Voltages are in microvolts. Consumed by P300 detection only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSample {
    /// Acquisition time within the recording day
    pub timestamp: NaiveTime,
    /// Fp1 (left frontal) electrode voltage (µV)
    pub eeg_fp1: f64,
    /// Fp2 (right frontal) electrode voltage (µV)
    pub eeg_fp2: f64,
    /// Photoplethysmography reading
    pub ppg: f64,
}

/// One row of an FFT power-table export for a single channel.
///
/// Keys are the frequency labels from the file header (e.g. "8.0"); values
/// are spectral power at that frequency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectralSample {
    pub timestamp: NaiveTime,
    pub frequencies: HashMap<String, f64>,
}

/// One row of the device's biomarker table: per-channel band percentages
/// plus heart metrics. The frequency-domain HRV columns (`vlf`/`lf`/`hf`)
/// are only present in newer firmware exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiomarkerSample {
    pub timestamp: NaiveTime,
    pub fp1_delta: f64,
    pub fp1_theta: f64,
    pub fp1_alpha: f64,
    pub fp1_beta: f64,
    pub fp1_gamma: f64,
    pub fp2_delta: f64,
    pub fp2_theta: f64,
    pub fp2_alpha: f64,
    pub fp2_beta: f64,
    pub fp2_gamma: f64,
    pub heartbeat_bpm: f64,
    pub sdnn: f64,
    pub rmssd: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlf: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lf: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hf: Option<f64>,
}

/// Fused output of one analysis run.
///
/// ERD/ERS fields are percent changes; `sdnn`/`rmssd` are milliseconds and
/// `lf_hf` a raw ratio; everything else is normalized to 0-1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Alpha-band desynchronization (% power drop, late vs early)
    pub erd_alpha: f64,
    /// Alpha-band synchronization (% power rise)
    pub ers_alpha: f64,
    pub erd_beta: f64,
    pub ers_beta: f64,
    /// Mean theta band percentage, normalized to 0-1
    pub theta_level: f64,
    pub sdnn: f64,
    pub rmssd: f64,
    pub lf_hf: f64,
    /// Peak post-stimulus amplitude, normalized to 0-1
    pub p300_amplitude: f64,
    pub engagement: f64,
    pub arousal: f64,
    pub valence: f64,
    pub overall_preference: f64,
}

/// Suitability of the measured affect state for each listening context.
///
/// Values are nominally 0-1 but are not clamped: the weighted sums can
/// exceed 1 when an unbounded component (e.g. `ersBeta / 100`) spikes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextScores {
    pub study: f64,
    pub workout: f64,
    pub rest: f64,
    pub presleep: f64,
    pub commute: f64,
    pub stress_relief: f64,
    pub feeling_good: f64,
}

/// Human-readable classification of an analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpretation {
    /// Theta x HRV quadrant label
    pub mood_state: String,
    /// Valence x arousal quadrant label
    pub emotional_profile: String,
    /// Recommendation-strength tier
    pub recommendation: String,
}

/// Complete response envelope, matching the shape the web API returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisEnvelope {
    pub success: bool,
    pub analysis: AnalysisResult,
    pub interpretation: Interpretation,
    pub context_scores: ContextScores,
}
