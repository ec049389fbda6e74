use mh_server::{AppState, build_router, error::Result as ServerResult, error::ServerError, logger};

use mh_hub::{Hub, HubSettings, Metrics, ShutdownCoordinator};

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerResult<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = mh_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file_path = config.log_file_path()?;
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting mh-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: e.to_string(),
        })?;
    info!("Prometheus recorder installed");

    let hub = Hub::new(HubSettings::from(&config.hub), Metrics::new());

    let shutdown = ShutdownCoordinator::new();

    let sweeper = hub.start_sweeper(&shutdown);

    let app_state =
        AppState::new(hub, shutdown.clone(), config.hub.keep_alive()).with_metrics(prometheus);
    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    // Event streams end on the shutdown signal, so graceful shutdown does not
    // wait on open connections indefinitely
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
        })
        .await?;

    if let Some(sweeper) = sweeper
        && let Err(e) = sweeper.await
    {
        warn!("Presence sweeper ended abnormally: {}", e);
    }

    info!("Graceful shutdown complete");
    Ok(())
}
