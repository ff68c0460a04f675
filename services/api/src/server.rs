use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;
use wijkscan::config::AppConfig;
use wijkscan::datasets::scoring::{ScoringEngine, ScoringOverrides};
use wijkscan::telemetry;

use crate::cli::ServeArgs;
use crate::error::ApiError;
use crate::infra::AppState;
use crate::routes::router;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), ApiError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    // The override asset is loaded exactly once; scoring degrades to
    // defaults when it is missing or corrupt.
    let overrides = ScoringOverrides::load(config.scoring.overrides_path.as_ref());
    if overrides.is_empty() {
        info!("no scoring overrides configured, defaults apply to every indicator");
    }
    let engine = Arc::new(ScoringEngine::new(overrides));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        engine,
    };

    let app = router()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "location statistics service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
