use crate::cli::ServeArgs;
use crate::infra::{load_rule_table, AppState, InMemoryScreeningRepository};
use crate::routes::with_screening_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use prenatal_screening::config::AppConfig;
use prenatal_screening::error::AppError;
use prenatal_screening::screening::ScreeningService;
use prenatal_screening::telemetry;
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
    if let Some(rules) = args.rules.take() {
        config.screening.rule_table_path = Some(rules);
    }

    telemetry::init(&config.telemetry)?;

    let rule_table = Arc::new(load_rule_table(
        config.screening.rule_table_path.as_deref(),
    )?);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryScreeningRepository::default());
    let screening_service = Arc::new(ScreeningService::new(repository, rule_table.clone()));

    let app = with_screening_routes(screening_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        criteria = rule_table.len(),
        "prenatal screening service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
