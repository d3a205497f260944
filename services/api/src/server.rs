use crate::cli::ServeArgs;
use crate::infra::{build_store, AppState};
use crate::routes::with_candidate_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use skill_tier::candidates::CandidateService;
use skill_tier::config::AppConfig;
use skill_tier::error::AppError;
use skill_tier::telemetry;
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
    if let Some(data_file) = args.data_file.take() {
        config.store.data_file = Some(data_file);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(build_store(&config.store)?);
    let candidate_service = Arc::new(CandidateService::new(store));

    let app = with_candidate_routes(candidate_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "skill tier assessment api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
