use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub(crate) const MAX_SCORE: u8 = 100;

/// Similarity judgment produced by a face-matching backend.
///
/// `face_match_score` says how similar the two faces look; `confidence_score`
/// says how certain the backend is in that judgment. Both are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceMatchOutcome {
    pub face_match_score: u8,
    pub confidence_score: u8,
}

impl FaceMatchOutcome {
    /// A backend must never leak an out-of-range score into a decision.
    pub fn validated(self) -> Result<Self, CheckError> {
        if self.face_match_score > MAX_SCORE || self.confidence_score > MAX_SCORE {
            return Err(CheckError::MalformedResponse(format!(
                "scores out of range: face_match={} confidence={}",
                self.face_match_score, self.confidence_score
            )));
        }
        Ok(self)
    }
}

/// Result of a public-records search for the subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundCheckOutcome {
    pub passed: bool,
    pub notes: String,
}

/// Failure raised by a check backend. Recovered by the verification service,
/// never surfaced to its callers.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("check backend unavailable: {0}")]
    Unavailable(String),
    #[error("check backend returned malformed data: {0}")]
    MalformedResponse(String),
}

/// Face-similarity capability consumed by the verification service.
#[async_trait]
pub trait FaceMatcher: Send + Sync {
    async fn compare(
        &self,
        document_photo_url: &str,
        selfie_photo_url: &str,
    ) -> Result<FaceMatchOutcome, CheckError>;
}

/// Public-records search capability consumed by the verification service.
///
/// Implementations are expected to fail open: when the search cannot be
/// completed, report `passed` with explanatory notes instead of blocking the
/// subject. A transient search outage must never read as an adverse record.
#[async_trait]
pub trait BackgroundChecker: Send + Sync {
    async fn search(
        &self,
        full_name: &str,
        national_identifier: &str,
    ) -> Result<BackgroundCheckOutcome, CheckError>;
}

/// Stand-in for a real face-matching service (AWS Rekognition CompareFaces,
/// Azure Face Verify, or similar). Draws uniform scores over fixed ranges and
/// never looks at the images; only the interface is meant to survive a real
/// integration.
#[derive(Debug, Default, Clone)]
pub struct SimulatedFaceMatcher;

#[async_trait]
impl FaceMatcher for SimulatedFaceMatcher {
    async fn compare(
        &self,
        _document_photo_url: &str,
        _selfie_photo_url: &str,
    ) -> Result<FaceMatchOutcome, CheckError> {
        let mut rng = rand::thread_rng();
        FaceMatchOutcome {
            face_match_score: rng.gen_range(70..100),
            confidence_score: rng.gen_range(80..100),
        }
        .validated()
    }
}

/// Stub records search that always reports a clean history. A production
/// checker queries a real records API but keeps the same fail-open contract.
#[derive(Debug, Default, Clone)]
pub struct StubBackgroundChecker;

#[async_trait]
impl BackgroundChecker for StubBackgroundChecker {
    async fn search(
        &self,
        _full_name: &str,
        _national_identifier: &str,
    ) -> Result<BackgroundCheckOutcome, CheckError> {
        Ok(BackgroundCheckOutcome {
            passed: true,
            notes: "No adverse public records found".to_string(),
        })
    }
}
