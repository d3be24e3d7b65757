//! Response envelope encoding
//!
//! Builds the `{success, analysis, interpretation, contextScores}` envelope
//! the web API returns to the uploader, and serializes it to JSON with the
//! exact field names existing clients depend on.

use crate::context::context_scores;
use crate::error::AnalysisError;
use crate::interpret::interpret;
use crate::types::{AnalysisEnvelope, AnalysisResult};

/// Encoder for the analysis response envelope
pub struct EnvelopeEncoder;

impl EnvelopeEncoder {
    /// Assemble the full envelope for an analysis result.
    pub fn encode(result: &AnalysisResult) -> AnalysisEnvelope {
        AnalysisEnvelope {
            success: true,
            analysis: result.clone(),
            interpretation: interpret(result),
            context_scores: context_scores(result),
        }
    }

    /// Encode to a compact JSON string.
    pub fn encode_to_json(result: &AnalysisResult) -> Result<String, AnalysisError> {
        serde_json::to_string(&Self::encode(result)).map_err(AnalysisError::Json)
    }

    /// Encode to pretty-printed JSON.
    pub fn encode_to_json_pretty(result: &AnalysisResult) -> Result<String, AnalysisError> {
        serde_json::to_string_pretty(&Self::encode(result)).map_err(AnalysisError::Json)
    }
}
