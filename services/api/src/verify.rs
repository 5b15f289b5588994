use crate::infra::{InMemoryVerificationRepository, LoggingAlertPublisher};
use clap::Args;
use std::sync::Arc;

use bokaboka_verification::error::AppError;
use bokaboka_verification::verification::{
    PolicyConfig, SimulatedFaceMatcher, StubBackgroundChecker, VerificationRequest,
    VerificationService,
};

/// Arguments for a one-shot verification run. Empty values are accepted on
/// purpose; the engine returns a structured result either way.
#[derive(Args, Debug)]
pub(crate) struct VerifyArgs {
    /// Declared full name of the professional
    #[arg(long, default_value = "")]
    pub(crate) full_name: String,
    /// National identifier (CPF or equivalent)
    #[arg(long, default_value = "")]
    pub(crate) national_id: String,
    /// URL of the uploaded identity document photo
    #[arg(long, default_value = "")]
    pub(crate) document_photo_url: String,
    /// URL of the uploaded selfie photo
    #[arg(long, default_value = "")]
    pub(crate) selfie_photo_url: String,
}

pub(crate) async fn run_verify(args: VerifyArgs) -> Result<(), AppError> {
    let service = VerificationService::new(
        Arc::new(SimulatedFaceMatcher),
        Arc::new(StubBackgroundChecker),
        Arc::new(InMemoryVerificationRepository::default()),
        Arc::new(LoggingAlertPublisher),
        PolicyConfig::default(),
    );

    let record = service
        .verify(VerificationRequest {
            full_name: args.full_name,
            national_identifier: args.national_id,
            document_photo_url: args.document_photo_url,
            selfie_photo_url: args.selfie_photo_url,
        })
        .await?;

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
