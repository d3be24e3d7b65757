//! NeuroTune Affect - EEG signal-to-affect scoring engine
//!
//! Turns a listening session's biometric exports into normalized affect
//! scores through a deterministic pipeline: format parsing → band-power and
//! HRV feature extraction → affect fusion → context scoring and
//! interpretation.
//!
//! ## Modules
//!
//! - **parse**: Tab-separated device exports (raw EEG/PPG, FFT power tables,
//!   biomarkers) into typed sample sequences
//! - **bands** / **features**: Band power, ERD/ERS, theta, HRV, P300
//! - **fusion**: Engagement, arousal, valence, overall preference
//! - **context** / **interpret**: Listening-context scores and display labels

pub mod bands;
pub mod context;
pub mod encoder;
pub mod error;
pub mod features;
pub mod fusion;
pub mod interpret;
pub mod parse;
pub mod pipeline;
pub mod types;

pub use context::context_scores;
pub use encoder::EnvelopeEncoder;
pub use error::AnalysisError;
pub use interpret::interpret;
pub use pipeline::analyze;
pub use types::{AnalysisEnvelope, AnalysisResult, ContextScores, Interpretation};

/// Engine version embedded in CLI diagnostics
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for CLI diagnostics
pub const PRODUCER_NAME: &str = "neurotune-affect";
