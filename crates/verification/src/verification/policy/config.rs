use serde::{Deserialize, Serialize};

/// Decision thresholds applied by the policy engine.
///
/// Both thresholds are inclusive on the passing side: a score exactly equal
/// to the threshold passes. The 75/85 defaults are the canonical policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub face_match_threshold: u8,
    pub confidence_threshold: u8,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            face_match_threshold: 75,
            confidence_threshold: 85,
        }
    }
}
