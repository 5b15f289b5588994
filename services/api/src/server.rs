use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryVerificationRepository, LoggingAlertPublisher};
use crate::routes::with_verification_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

use bokaboka_verification::config::AppConfig;
use bokaboka_verification::error::AppError;
use bokaboka_verification::telemetry;
use bokaboka_verification::verification::{
    SimulatedFaceMatcher, StubBackgroundChecker, VerificationService,
};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(config.environment, &config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryVerificationRepository::default());
    let alerts = Arc::new(LoggingAlertPublisher);
    let service = Arc::new(VerificationService::new(
        Arc::new(SimulatedFaceMatcher),
        Arc::new(StubBackgroundChecker),
        repository,
        alerts,
        config.policy,
    ));

    let app = with_verification_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "verification service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
