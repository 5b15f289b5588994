use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::checks::{BackgroundChecker, FaceMatcher};
use super::domain::{Recommendation, VerificationId, VerificationRequest, VerificationStatus};
use super::policy::{DecisionEngine, PolicyConfig};
use super::repository::{
    AlertPublisher, RepositoryError, ReviewAlert, VerificationRecord, VerificationRepository,
};

/// Service composing the check collaborators, decision engine, repository,
/// and review alerts.
pub struct VerificationService<F, B, R, A> {
    face_matcher: Arc<F>,
    background_checker: Arc<B>,
    repository: Arc<R>,
    alerts: Arc<A>,
    engine: Arc<DecisionEngine>,
}

static VERIFICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_verification_id() -> VerificationId {
    let id = VERIFICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    VerificationId(format!("vrf-{id:06}"))
}

impl<F, B, R, A> VerificationService<F, B, R, A>
where
    F: FaceMatcher + 'static,
    B: BackgroundChecker + 'static,
    R: VerificationRepository + 'static,
    A: AlertPublisher + 'static,
{
    pub fn new(
        face_matcher: Arc<F>,
        background_checker: Arc<B>,
        repository: Arc<R>,
        alerts: Arc<A>,
        config: PolicyConfig,
    ) -> Self {
        Self {
            face_matcher,
            background_checker,
            repository,
            alerts,
            engine: Arc::new(DecisionEngine::new(config)),
        }
    }

    /// Run both checks, decide, persist the record, and alert the review
    /// queue whenever a human has to look.
    ///
    /// Check backend failures never escape this method as errors; a degraded
    /// run lands in manual review with the fixed fallback result. The only
    /// error paths remaining are the repository and alert transports.
    pub async fn verify(
        &self,
        request: VerificationRequest,
    ) -> Result<VerificationRecord, VerificationServiceError> {
        // The two checks have no data dependency; run them concurrently and
        // decide only once both have settled.
        let (face, background) = tokio::join!(
            self.face_matcher
                .compare(&request.document_photo_url, &request.selfie_photo_url),
            self.background_checker
                .search(&request.full_name, &request.national_identifier),
        );

        let result = match (face, background) {
            (Ok(face), Ok(background)) => match face.validated() {
                Ok(face) => self.engine.evaluate(&face, &background),
                Err(error) => {
                    warn!(%error, "face match returned malformed scores");
                    self.engine.fallback()
                }
            },
            (face, background) => {
                if let Err(error) = &face {
                    warn!(%error, "face match failed");
                }
                if let Err(error) = &background {
                    warn!(%error, "background check failed");
                }
                self.engine.fallback()
            }
        };

        let status = match result.recommendation {
            Recommendation::Approve => VerificationStatus::Approved,
            Recommendation::Reject => VerificationStatus::Rejected,
            Recommendation::ManualReview => VerificationStatus::UnderReview,
        };

        let record = VerificationRecord {
            verification_id: next_verification_id(),
            subject: request,
            status,
            result,
            checked_at: Utc::now(),
            reviewer_note: None,
        };

        let stored = self.repository.insert(record)?;

        if !matches!(stored.result.recommendation, Recommendation::Approve) {
            let mut details = BTreeMap::new();
            details.insert(
                "recommendation".to_string(),
                stored.result.recommendation.label().to_string(),
            );
            details.insert("reasoning".to_string(), stored.result.reasoning.clone());
            self.alerts.publish(ReviewAlert {
                template: "verification_needs_review".to_string(),
                verification_id: stored.verification_id.clone(),
                details,
            })?;
        }

        info!(
            verification_id = %stored.verification_id.0,
            recommendation = stored.result.recommendation.label(),
            "verification decision recorded"
        );

        Ok(stored)
    }

    /// Fetch a verification record for API responses.
    pub fn get(
        &self,
        verification_id: &VerificationId,
    ) -> Result<VerificationRecord, VerificationServiceError> {
        let record = self
            .repository
            .fetch(verification_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// List records awaiting human review.
    pub fn pending(&self, limit: usize) -> Result<Vec<VerificationRecord>, VerificationServiceError> {
        Ok(self.repository.pending(limit)?)
    }

    /// Apply a human override. Admins may approve or reject a record
    /// regardless of the automated recommendation.
    pub fn review(
        &self,
        verification_id: &VerificationId,
        decision: ReviewDecision,
        note: Option<String>,
    ) -> Result<VerificationRecord, VerificationServiceError> {
        let mut record = self
            .repository
            .fetch(verification_id)?
            .ok_or(RepositoryError::NotFound)?;

        record.status = match decision {
            ReviewDecision::Approve => VerificationStatus::Approved,
            ReviewDecision::Reject => VerificationStatus::Rejected,
        };
        record.reviewer_note = note;

        self.repository.update(record.clone())?;

        info!(
            verification_id = %record.verification_id.0,
            status = record.status.label(),
            "admin review applied"
        );

        Ok(record)
    }
}

/// Human override verbs accepted by the review endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

/// Error raised by the verification service.
#[derive(Debug, thiserror::Error)]
pub enum VerificationServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Alert(#[from] super::repository::AlertError),
}
