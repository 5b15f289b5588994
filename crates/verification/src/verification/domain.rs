use serde::{Deserialize, Serialize};

/// Identifier wrapper for verification records. Ids come from a monotonic
/// sequence, so their ordering doubles as submission order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VerificationId(pub String);

/// Identity details a professional submits during onboarding.
///
/// Every field may be empty. The intake UI calls the service speculatively
/// before all fields are collected, so empty input must still produce a
/// structured result; format validation (CPF digits and the like) belongs to
/// the intake layer, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub full_name: String,
    pub national_identifier: String,
    pub document_photo_url: String,
    pub selfie_photo_url: String,
}

/// Automated recommendation produced by the decision policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Approve,
    Reject,
    ManualReview,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::Approve => "approve",
            Recommendation::Reject => "reject",
            Recommendation::ManualReview => "manual_review",
        }
    }
}

/// Fully populated outcome of one verification run.
///
/// Always complete: on a degraded run the scores are reported as zero rather
/// than omitted, and `reasoning` / `background_check_notes` are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub recommendation: Recommendation,
    pub reasoning: String,
    pub face_match_score: u8,
    pub confidence_score: u8,
    pub background_check_passed: bool,
    pub background_check_notes: String,
}

/// Lifecycle status of a verification record, including admin overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    UnderReview,
    Approved,
    Rejected,
}

impl VerificationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            VerificationStatus::UnderReview => "under_review",
            VerificationStatus::Approved => "approved",
            VerificationStatus::Rejected => "rejected",
        }
    }
}
