use crate::cli::ServeArgs;
use crate::infra::{build_locator, open_language_context, AppState, QuizState};
use crate::routes::quiz_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use sqs_quiz::config::AppConfig;
use sqs_quiz::error::AppError;
use sqs_quiz::telemetry;
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
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let language = open_language_context(&config.preferences);
    let locator = build_locator(&config.geolocation);
    let quiz_state = QuizState::new(language, locator);

    let app = quiz_router(quiz_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "sqs quiz service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
