use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::warn;

use bokaboka_verification::verification::{
    AlertError, AlertPublisher, RepositoryError, ReviewAlert, VerificationId, VerificationRecord,
    VerificationRepository, VerificationStatus,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory record store. Real persistence lives behind the repository
/// trait in an external database; this keeps a single-process deployment and
/// the CLI tooling self-contained. Keyed on the sequential id so the review
/// queue always lists the oldest pending records first.
#[derive(Default, Clone)]
pub(crate) struct InMemoryVerificationRepository {
    records: Arc<Mutex<BTreeMap<VerificationId, VerificationRecord>>>,
}

impl VerificationRepository for InMemoryVerificationRepository {
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
        if guard.contains_key(&record.verification_id) {
            guard.insert(record.verification_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &VerificationId) -> Result<Option<VerificationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, limit: usize) -> Result<Vec<VerificationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.status == VerificationStatus::UnderReview)
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Alert publisher that surfaces review alerts on the service log. The
/// review queue is read through the pending endpoint; the log line is for
/// operators watching the service.
#[derive(Default, Clone)]
pub(crate) struct LoggingAlertPublisher;

impl AlertPublisher for LoggingAlertPublisher {
    fn publish(&self, alert: ReviewAlert) -> Result<(), AlertError> {
        let reasoning = alert
            .details
            .get("reasoning")
            .map(String::as_str)
            .unwrap_or_default();
        warn!(
            verification_id = %alert.verification_id.0,
            template = %alert.template,
            %reasoning,
            "verification awaiting human review"
        );
        Ok(())
    }
}
