use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{VerificationId, VerificationRequest, VerificationResult, VerificationStatus};

/// Repository record pairing the submitted identity details with the
/// automated decision and the review lifecycle around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub verification_id: VerificationId,
    pub subject: VerificationRequest,
    pub status: VerificationStatus,
    pub result: VerificationResult,
    pub checked_at: DateTime<Utc>,
    pub reviewer_note: Option<String>,
}

impl VerificationRecord {
    pub fn status_view(&self) -> VerificationStatusView {
        VerificationStatusView {
            verification_id: self.verification_id.clone(),
            status: self.status.label(),
            recommendation: self.result.recommendation.label(),
            decision_rationale: self.result.reasoning.clone(),
            face_match_score: self.result.face_match_score,
            confidence_score: self.result.confidence_score,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait VerificationRepository: Send + Sync {
    fn insert(&self, record: VerificationRecord) -> Result<VerificationRecord, RepositoryError>;
    fn update(&self, record: VerificationRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &VerificationId) -> Result<Option<VerificationRecord>, RepositoryError>;
    fn pending(&self, limit: usize) -> Result<Vec<VerificationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook so the admin surface learns about records needing a human.
pub trait AlertPublisher: Send + Sync {
    fn publish(&self, alert: ReviewAlert) -> Result<(), AlertError>;
}

/// Alert payload carrying the full reasoning text for the review queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAlert {
    pub template: String,
    pub verification_id: VerificationId,
    pub details: BTreeMap<String, String>,
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation exposed through the HTTP facade. The raw
/// national identifier stays on the record and never leaves this view.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationStatusView {
    pub verification_id: VerificationId,
    pub status: &'static str,
    pub recommendation: &'static str,
    pub decision_rationale: String,
    pub face_match_score: u8,
    pub confidence_score: u8,
}
