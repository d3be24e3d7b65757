//! Result interpretation
//!
//! Pure classification of numeric scores into the display labels the app
//! shows after an upload: a theta x RMSSD mood quadrant, a valence x arousal
//! emotional-profile quadrant, and a four-tier recommendation strength.
//! The label strings are part of the API contract and must not drift.

use crate::types::{AnalysisResult, Interpretation};

/// Classify an analysis result into human-readable labels.
pub fn interpret(result: &AnalysisResult) -> Interpretation {
    let mood_state = match (result.theta_level > 0.5, result.rmssd > 100.0) {
        (true, true) => "Relaxed & Immersed",
        (true, false) => "Intense & Focused",
        (false, true) => "Calm but Disengaged",
        (false, false) => "Stressed or Aversive",
    };

    let emotional_profile = match (result.valence > 0.6, result.arousal > 0.5) {
        (true, true) => "Happy & Energetic",
        (true, false) => "Content & Relaxed",
        (false, true) => "Tense & Alert",
        (false, false) => "Calm & Neutral",
    };

    let recommendation = if result.overall_preference > 0.7 {
        "This type of music is highly recommended for you!"
    } else if result.overall_preference > 0.5 {
        "This music style works well for you in certain contexts."
    } else if result.overall_preference > 0.3 {
        "This music may be suitable for specific moods only."
    } else {
        "This music style may not be the best fit for you."
    };

    Interpretation {
        mood_state: mood_state.to_string(),
        emotional_profile: emotional_profile.to_string(),
        recommendation: recommendation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn result(theta: f64, rmssd: f64, valence: f64, arousal: f64, pref: f64) -> AnalysisResult {
        AnalysisResult {
            erd_alpha: 0.0,
            ers_alpha: 0.0,
            erd_beta: 0.0,
            ers_beta: 0.0,
            theta_level: theta,
            sdnn: 0.0,
            rmssd,
            lf_hf: 1.0,
            p300_amplitude: 0.0,
            engagement: 0.5,
            arousal,
            valence,
            overall_preference: pref,
        }
    }

    #[test]
    fn test_mood_state_quadrants() {
        let at = |theta, rmssd| interpret(&result(theta, rmssd, 0.5, 0.5, 0.5)).mood_state;
        assert_eq!(at(0.7, 120.0), "Relaxed & Immersed");
        assert_eq!(at(0.7, 80.0), "Intense & Focused");
        assert_eq!(at(0.3, 120.0), "Calm but Disengaged");
        assert_eq!(at(0.3, 80.0), "Stressed or Aversive");
    }

    #[test]
    fn test_mood_state_boundaries_fall_low() {
        // Exactly 0.5 theta and exactly 100 rmssd take the "not above" branch
        let interp = interpret(&result(0.5, 100.0, 0.5, 0.5, 0.5));
        assert_eq!(interp.mood_state, "Stressed or Aversive");
    }

    #[test]
    fn test_emotional_profile_quadrants() {
        let at = |valence, arousal| {
            interpret(&result(0.5, 50.0, valence, arousal, 0.5)).emotional_profile
        };
        assert_eq!(at(0.7, 0.6), "Happy & Energetic");
        assert_eq!(at(0.7, 0.4), "Content & Relaxed");
        assert_eq!(at(0.5, 0.6), "Tense & Alert");
        assert_eq!(at(0.5, 0.4), "Calm & Neutral");
    }

    #[test]
    fn test_recommendation_tiers() {
        let at = |pref| interpret(&result(0.5, 50.0, 0.5, 0.5, pref)).recommendation;
        assert_eq!(at(0.71), "This type of music is highly recommended for you!");
        assert_eq!(at(0.7), "This music style works well for you in certain contexts.");
        assert_eq!(at(0.51), "This music style works well for you in certain contexts.");
        assert_eq!(at(0.5), "This music may be suitable for specific moods only.");
        assert_eq!(at(0.31), "This music may be suitable for specific moods only.");
        assert_eq!(at(0.3), "This music style may not be the best fit for you.");
        assert_eq!(at(0.0), "This music style may not be the best fit for you.");
    }
}
