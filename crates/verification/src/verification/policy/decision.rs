use super::super::checks::{BackgroundCheckOutcome, FaceMatchOutcome};
use super::super::domain::Recommendation;
use super::config::PolicyConfig;

/// First matching rule wins: adverse records reject outright, then each
/// score is held against its threshold, and only a clean pass approves.
pub(crate) fn decide_outcome(
    face: &FaceMatchOutcome,
    background: &BackgroundCheckOutcome,
    config: &PolicyConfig,
) -> (Recommendation, String) {
    if !background.passed {
        return (
            Recommendation::Reject,
            format!("Adverse records found: {}", background.notes),
        );
    }

    if face.face_match_score < config.face_match_threshold {
        return (
            Recommendation::ManualReview,
            format!(
                "Facial similarity below threshold ({}). Manual review required.",
                config.face_match_threshold
            ),
        );
    }

    if face.confidence_score < config.confidence_threshold {
        return (
            Recommendation::ManualReview,
            format!(
                "Analysis confidence below threshold ({}). Manual review required.",
                config.confidence_threshold
            ),
        );
    }

    (
        Recommendation::Approve,
        "Facial verification approved and no adverse records found.".to_string(),
    )
}
