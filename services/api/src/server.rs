use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_operational_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use formsink::config::AppConfig;
use formsink::error::AppError;
use formsink::submissions::{SqliteSubmissionStore, SubmissionService};
use formsink::telemetry;
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
    if let Some(database) = args.database.take() {
        config.storage.database_path = database;
    }
    if let Some(data_file) = args.data_file.take() {
        config.storage.data_file = data_file;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        data_file: Arc::new(config.storage.data_file.clone()),
    };

    // Schema creation failure is fatal: a running process without a usable
    // table serves nothing but errors.
    let store = SqliteSubmissionStore::open(&config.storage.database_path)?;
    let service = Arc::new(SubmissionService::new(Arc::new(store)));

    let app = with_operational_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, database = %config.storage.database_path.display(), "submission service ready");
    info!("routes: / /submit /success /view-data /delete/:id /api /health /ready /metrics");

    axum::serve(listener, app).await?;
    Ok(())
}
