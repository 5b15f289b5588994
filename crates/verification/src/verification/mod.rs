//! Professional identity verification: check collaborators, decision policy,
//! review records, and the HTTP surface around them.
//!
//! The automated checks are swappable capabilities. The shipped face matcher
//! and background checker are stand-ins; the decision policy, record
//! lifecycle, and admin review workflow are the real contract.

pub mod checks;
pub mod domain;
pub mod policy;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use checks::{
    BackgroundCheckOutcome, BackgroundChecker, CheckError, FaceMatchOutcome, FaceMatcher,
    SimulatedFaceMatcher, StubBackgroundChecker,
};
pub use domain::{
    Recommendation, VerificationId, VerificationRequest, VerificationResult, VerificationStatus,
};
pub use policy::{DecisionEngine, PolicyConfig};
pub use repository::{
    AlertError, AlertPublisher, RepositoryError, ReviewAlert, VerificationRecord,
    VerificationRepository, VerificationStatusView,
};
pub use router::verification_router;
pub use service::{ReviewDecision, VerificationService, VerificationServiceError};
