mod config;
mod decision;

pub use config::PolicyConfig;

use super::checks::{BackgroundCheckOutcome, FaceMatchOutcome};
use super::domain::{Recommendation, VerificationResult};
use decision::decide_outcome;

/// Stateless engine mapping check outcomes to a recommendation.
///
/// Pure over its inputs: fixed outcomes always yield the same recommendation
/// and reasoning, so the only nondeterminism in a verification run lives in
/// the check backends.
pub struct DecisionEngine {
    config: PolicyConfig,
}

impl DecisionEngine {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// Merge both check outcomes into a fully populated result.
    pub fn evaluate(
        &self,
        face: &FaceMatchOutcome,
        background: &BackgroundCheckOutcome,
    ) -> VerificationResult {
        let (recommendation, reasoning) = decide_outcome(face, background, &self.config);

        VerificationResult {
            recommendation,
            reasoning,
            face_match_score: face.face_match_score,
            confidence_score: face.confidence_score,
            background_check_passed: background.passed,
            background_check_notes: background.notes.clone(),
        }
    }

    /// Terminal result for a failed or malformed check. A valid decision in
    /// its own right: callers treat it like any other outcome, and the zeroed
    /// scores keep every field within bounds.
    pub fn fallback(&self) -> VerificationResult {
        VerificationResult {
            recommendation: Recommendation::ManualReview,
            reasoning: "An error occurred during automated verification. Manual review required."
                .to_string(),
            face_match_score: 0,
            confidence_score: 0,
            background_check_passed: false,
            background_check_notes: "Background check could not be completed.".to_string(),
        }
    }
}
