use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAssessmentRepository};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

use maturity_ai::assessment::{
    reference_products, reference_use_cases, AssessmentCatalog, AssessmentService,
    OpenAiGenerator, TextGenerator,
};
use maturity_ai::config::AppConfig;
use maturity_ai::error::AppError;
use maturity_ai::telemetry;

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
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let generator: Option<Arc<dyn TextGenerator>> = OpenAiGenerator::from_config(&config.generation)
        .map(|generator| Arc::new(generator) as Arc<dyn TextGenerator>);
    if generator.is_none() {
        info!("no generation API key configured, serving deterministic fallbacks only");
    }

    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let assessment_service = Arc::new(AssessmentService::new(
        Arc::new(AssessmentCatalog::reference()),
        Arc::new(reference_products()),
        Arc::new(reference_use_cases()),
        repository,
        generator,
    ));

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "ai maturity service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
