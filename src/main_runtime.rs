use statistella::analytics;
use statistella::api::{create_router, AppState};
use statistella::cli::output::OutputMode;
use statistella::cli::report;
use statistella::cli::ReportArgs;
use statistella::config::{AppConfig, LoggingConfig};
use statistella::dataset::Dataset;
use statistella::error::{Result, StatistellaError};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=warn", config.level)));

    // `tracing_appender::rolling::daily` panics if it can't create the initial
    // log file, so preflight writability first.
    let file_layer = config.dir.as_ref().and_then(|log_dir| {
        if let Err(e) = std::fs::create_dir_all(log_dir) {
            eprintln!(
                "Warning: Could not create log directory {} ({}), file logging disabled",
                log_dir.display(),
                e
            );
            return None;
        }

        let test_path = log_dir.join(".statistella_write_test");
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&test_path)
        {
            Ok(_) => {
                let _ = std::fs::remove_file(&test_path);

                // Daily rotating file appender
                let file_appender = tracing_appender::rolling::daily(log_dir, "statistella.log");
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                // Keep the guard alive for the whole process
                Box::leak(Box::new(guard));

                eprintln!("Logging to: {}/statistella.log", log_dir.display());
                Some(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_target(true),
                )
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not write to log directory {} ({}), file logging disabled",
                    log_dir.display(),
                    e
                );
                None
            }
        }
    });

    // Console layer, plain or JSON
    let (plain_layer, json_layer) = if config.json {
        (None, Some(tracing_subscriber::fmt::layer().json().with_target(true)))
    } else {
        (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            ),
            None,
        )
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(plain_layer)
        .with(json_layer)
        .with(file_layer)
        .try_init();
}

/// Logging for one-shot commands whose stdout is the report itself
pub fn init_logging_simple() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_dataset(config: &AppConfig) -> Result<Dataset> {
    let dataset = Dataset::load(&config.data)?;
    info!(
        team_rows = dataset.team_row_count(),
        player_rows = dataset.player_row_count(),
        "Dataset loaded"
    );
    Ok(dataset)
}

pub async fn run_serve(config: AppConfig) -> Result<()> {
    let dataset = load_dataset(&config)?;
    let state = AppState::new(dataset, config.analytics.clone());
    let metrics = state.metrics.clone();
    let app = create_router(state);

    let host: std::net::IpAddr = config.server.host.parse().map_err(|e| {
        StatistellaError::Server(format!("invalid server.host {}: {}", config.server.host, e))
    })?;
    let addr = SocketAddr::new(host, config.server.port);
    info!("Starting dashboard API on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StatistellaError::Server(format!("API server error: {}", e)))?;

    metrics.log_status();
    info!("Dashboard API stopped");
    Ok(())
}

pub fn run_report(config: &AppConfig, args: &ReportArgs) -> Result<()> {
    let dataset = load_dataset(config)?;
    let results = analytics::compute(&dataset, &args.selection(), &config.analytics);
    report::print_dashboard(&results, OutputMode::from_json_flag(args.json))?;
    Ok(())
}

pub fn run_options(config: &AppConfig, json: bool) -> Result<()> {
    let dataset = load_dataset(config)?;
    report::print_options(&dataset.filter_options(), OutputMode::from_json_flag(json))?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Received shutdown signal");
}
