use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAssessmentRepository, InMemoryClubDirectory};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use clubcompass::assessment::{AssessmentService, RecommendationEngine, ScoringTable};
use clubcompass::config::AppConfig;
use clubcompass::error::AppError;
use clubcompass::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));

    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let directory = Arc::new(InMemoryClubDirectory::seeded());
    let engine = Arc::new(RecommendationEngine::new(ScoringTable::builtin()));
    let assessment_service = Arc::new(AssessmentService::with_limit(
        repository,
        directory.clone(),
        engine,
        config.recommendations.limit,
    ));

    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        directory,
    };

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "club recommendation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
