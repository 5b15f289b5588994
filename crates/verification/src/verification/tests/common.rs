use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::verification::checks::{
    BackgroundCheckOutcome, BackgroundChecker, CheckError, FaceMatchOutcome, FaceMatcher,
};
use crate::verification::domain::{VerificationId, VerificationRequest};
use crate::verification::policy::{DecisionEngine, PolicyConfig};
use crate::verification::repository::{
    AlertError, AlertPublisher, RepositoryError, ReviewAlert, VerificationRecord,
    VerificationRepository,
};
use crate::verification::{verification_router, VerificationService};

pub(super) fn request() -> VerificationRequest {
    VerificationRequest {
        full_name: "Joana Pereira".to_string(),
        national_identifier: "123.456.789-00".to_string(),
        document_photo_url: "https://cdn.bokaboka.test/docs/joana-id.jpg".to_string(),
        selfie_photo_url: "https://cdn.bokaboka.test/selfies/joana.jpg".to_string(),
    }
}

pub(super) fn policy_config() -> PolicyConfig {
    PolicyConfig::default()
}

pub(super) fn decision_engine() -> DecisionEngine {
    DecisionEngine::new(policy_config())
}

pub(super) fn face(face_match_score: u8, confidence_score: u8) -> FaceMatchOutcome {
    FaceMatchOutcome {
        face_match_score,
        confidence_score,
    }
}

pub(super) fn clean_background() -> BackgroundCheckOutcome {
    BackgroundCheckOutcome {
        passed: true,
        notes: "No adverse public records found".to_string(),
    }
}

pub(super) fn adverse_background(notes: &str) -> BackgroundCheckOutcome {
    BackgroundCheckOutcome {
        passed: false,
        notes: notes.to_string(),
    }
}

pub(super) struct FixedFaceMatcher(pub(super) FaceMatchOutcome);

#[async_trait]
impl FaceMatcher for FixedFaceMatcher {
    async fn compare(
        &self,
        _document_photo_url: &str,
        _selfie_photo_url: &str,
    ) -> Result<FaceMatchOutcome, CheckError> {
        Ok(self.0)
    }
}

pub(super) struct FailingFaceMatcher;

#[async_trait]
impl FaceMatcher for FailingFaceMatcher {
    async fn compare(
        &self,
        _document_photo_url: &str,
        _selfie_photo_url: &str,
    ) -> Result<FaceMatchOutcome, CheckError> {
        Err(CheckError::Unavailable("face service offline".to_string()))
    }
}

pub(super) struct FixedBackgroundChecker(pub(super) BackgroundCheckOutcome);

#[async_trait]
impl BackgroundChecker for FixedBackgroundChecker {
    async fn search(
        &self,
        _full_name: &str,
        _national_identifier: &str,
    ) -> Result<BackgroundCheckOutcome, CheckError> {
        Ok(self.0.clone())
    }
}

pub(super) struct FailingBackgroundChecker;

#[async_trait]
impl BackgroundChecker for FailingBackgroundChecker {
    async fn search(
        &self,
        _full_name: &str,
        _national_identifier: &str,
    ) -> Result<BackgroundCheckOutcome, CheckError> {
        Err(CheckError::Unavailable("records search offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<BTreeMap<VerificationId, VerificationRecord>>>,
}

impl VerificationRepository for MemoryRepository {
    fn insert(&self, record: VerificationRecord) -> Result<VerificationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.verification_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.verification_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: VerificationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.verification_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &VerificationId) -> Result<Option<VerificationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, limit: usize) -> Result<Vec<VerificationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| {
                record.status == crate::verification::domain::VerificationStatus::UnderReview
            })
            .take(limit)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAlerts {
    events: Arc<Mutex<Vec<ReviewAlert>>>,
}

impl MemoryAlerts {
    pub(super) fn events(&self) -> Vec<ReviewAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl AlertPublisher for MemoryAlerts {
    fn publish(&self, alert: ReviewAlert) -> Result<(), AlertError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct ConflictRepository;

impl VerificationRepository for ConflictRepository {
    fn insert(&self, _record: VerificationRecord) -> Result<VerificationRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: VerificationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &VerificationId) -> Result<Option<VerificationRecord>, RepositoryError> {
        Ok(None)
    }

    fn pending(&self, _limit: usize) -> Result<Vec<VerificationRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl VerificationRepository for UnavailableRepository {
    fn insert(&self, _record: VerificationRecord) -> Result<VerificationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: VerificationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &VerificationId) -> Result<Option<VerificationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn pending(&self, _limit: usize) -> Result<Vec<VerificationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) type FixedService =
    VerificationService<FixedFaceMatcher, FixedBackgroundChecker, MemoryRepository, MemoryAlerts>;

pub(super) fn build_service(
    face: FaceMatchOutcome,
    background: BackgroundCheckOutcome,
) -> (FixedService, Arc<MemoryRepository>, Arc<MemoryAlerts>) {
    let repository = Arc::new(MemoryRepository::default());
    let alerts = Arc::new(MemoryAlerts::default());
    let service = VerificationService::new(
        Arc::new(FixedFaceMatcher(face)),
        Arc::new(FixedBackgroundChecker(background)),
        repository.clone(),
        alerts.clone(),
        policy_config(),
    );
    (service, repository, alerts)
}

pub(super) fn verification_router_with_service(service: FixedService) -> axum::Router {
    verification_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
