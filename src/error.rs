//! Error types for NeuroTune affect analysis
//!
//! The engine itself degrades silently on malformed rows and fields; these
//! variants cover the structural failures at the crate boundary (encoding,
//! callers submitting no data at all).

use thiserror::Error;

/// Errors that can occur around an analysis run
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no input data provided: at least one of raw, fp1Fft, fp2Fft, biomarkers is required")]
    NoInput,

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
