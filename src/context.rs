//! Listening-context scoring
//!
//! Maps a fused analysis result onto seven activity contexts via per-context
//! weighted sums. The weights within each context sum to 1, but individual
//! components (the `ersBeta / 100` and `ersAlpha / 100` terms) are unbounded
//! above, so a score can exceed 1 on strongly synchronized recordings. That
//! quirk is preserved for compatibility with the existing API; see the open
//! questions in DESIGN.md.

use crate::types::{AnalysisResult, ContextScores};

/// Score the suitability of the measured state for each listening context.
pub fn context_scores(result: &AnalysisResult) -> ContextScores {
    let moderate_arousal = 1.0 - (result.arousal - 0.5).abs();
    let moderate_engagement = 1.0 - (result.engagement - 0.5).abs();

    ContextScores {
        // Study: high engagement, moderate arousal
        study: result.engagement * 0.5 + moderate_arousal * 0.3 + result.valence * 0.2,

        // Workout: high arousal, high engagement
        workout: result.arousal * 0.5 + result.engagement * 0.3 + result.ers_beta / 100.0 * 0.2,

        // Rest: low arousal, high valence
        rest: (1.0 - result.arousal) * 0.4
            + result.valence * 0.4
            + result.ers_alpha / 100.0 * 0.2,

        // Pre-sleep: very low arousal, alpha synchronization, high HRV
        presleep: (1.0 - result.arousal) * 0.5
            + result.ers_alpha / 100.0 * 0.3
            + result.rmssd / 200.0 * 0.2,

        // Commute: moderate engagement, moderate arousal
        commute: moderate_engagement * 0.4 + moderate_arousal * 0.4 + result.valence * 0.2,

        // Stress relief: strong HRV response, lower arousal
        stress_relief: result.rmssd / 200.0 * 0.4
            + (1.0 - result.arousal) * 0.3
            + result.valence * 0.3,

        // Feeling good: high valence, high engagement
        feeling_good: result.valence * 0.5
            + result.engagement * 0.3
            + result.overall_preference * 0.2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn result() -> AnalysisResult {
        AnalysisResult {
            erd_alpha: 0.0,
            ers_alpha: 20.0,
            erd_beta: 0.0,
            ers_beta: 40.0,
            theta_level: 0.6,
            sdnn: 45.0,
            rmssd: 100.0,
            lf_hf: 1.2,
            p300_amplitude: 0.5,
            engagement: 0.8,
            arousal: 0.7,
            valence: 0.6,
            overall_preference: 0.65,
        }
    }

    #[test]
    fn test_study_weighting() {
        let scores = context_scores(&result());
        // 0.8*0.5 + (1 - 0.2)*0.3 + 0.6*0.2 = 0.76
        assert!((scores.study - 0.76).abs() < 1e-9);
    }

    #[test]
    fn test_workout_weighting() {
        let scores = context_scores(&result());
        // 0.7*0.5 + 0.8*0.3 + 0.4*0.2 = 0.67
        assert!((scores.workout - 0.67).abs() < 1e-9);
    }

    #[test]
    fn test_presleep_weighting() {
        let scores = context_scores(&result());
        // 0.3*0.5 + 0.2*0.3 + 0.5*0.2 = 0.31
        assert!((scores.presleep - 0.31).abs() < 1e-9);
    }

    #[test]
    fn test_stress_relief_weighting() {
        let scores = context_scores(&result());
        // 0.5*0.4 + 0.3*0.3 + 0.6*0.3 = 0.47
        assert!((scores.stress_relief - 0.47).abs() < 1e-9);
    }

    #[test]
    fn test_feeling_good_weighting() {
        let scores = context_scores(&result());
        // 0.6*0.5 + 0.8*0.3 + 0.65*0.2 = 0.67
        assert!((scores.feeling_good - 0.67).abs() < 1e-9);
    }

    #[test]
    fn test_low_arousal_favors_rest_over_workout() {
        let mut calm = result();
        calm.arousal = 0.1;
        let scores = context_scores(&calm);
        assert!(scores.rest > scores.workout);
    }

    #[test]
    fn test_scores_can_exceed_one() {
        // An extreme beta synchronization pushes workout past 1.0
        let mut spiked = result();
        spiked.ers_beta = 400.0;
        spiked.arousal = 1.0;
        spiked.engagement = 1.0;
        let scores = context_scores(&spiked);
        assert!(scores.workout > 1.0);
    }

    #[test]
    fn test_neutral_result_moderate_everywhere() {
        let neutral = AnalysisResult {
            erd_alpha: 0.0,
            ers_alpha: 0.0,
            erd_beta: 0.0,
            ers_beta: 0.0,
            theta_level: 0.5,
            sdnn: 0.0,
            rmssd: 0.0,
            lf_hf: 1.0,
            p300_amplitude: 0.0,
            engagement: 0.5,
            arousal: 0.5,
            valence: 0.5,
            overall_preference: 0.44,
        };
        let scores = context_scores(&neutral);
        assert_eq!(scores.study, 0.65);
        assert_eq!(scores.commute, 0.9);
        assert!((scores.feeling_good - 0.488).abs() < 1e-9);
    }
}
