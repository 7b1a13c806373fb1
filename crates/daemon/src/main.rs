mod countdown;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use radarsweep_core::{
    load_config, validate_config, CandidateSetBuilder, CycleEvent, CycleOrchestrator,
    CycleScheduler, HttpFetcher, ImageTransformer,
};

use countdown::LogCountdown;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("radarsweep {} starting", VERSION);

    // Determine config path
    let config_path = std::env::var("RADARSWEEP_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Work folder: {:?}", config.work_folder);
    info!(
        "Window: {} minutes, interval: {}s",
        config.source.window_size, config.scheduler.interval_secs
    );

    tokio::fs::create_dir_all(&config.work_folder)
        .await
        .with_context(|| format!("Failed to create work folder {:?}", config.work_folder))?;

    // Wire the cycle collaborators
    let fetcher = Arc::new(
        HttpFetcher::new(config.source.timeout_secs).context("Failed to create HTTP fetcher")?,
    );
    let transformer = Arc::new(ImageTransformer::new(config.transform.clone()));
    let builder = CandidateSetBuilder::new(config.source.clone(), config.work_folder.clone());

    let orchestrator = Arc::new(CycleOrchestrator::new(
        config.orchestrator.clone(),
        builder,
        fetcher,
        transformer,
    ));

    // Mirror cycle transitions into the log
    orchestrator.subscribe(Arc::new(|event| match event {
        CycleEvent::State(state) => info!(%state, "Cycle state changed"),
        CycleEvent::Progress(progress) => info!(progress, "Cycle progress"),
    }));

    let scheduler = Arc::new(CycleScheduler::new(
        config.scheduler.clone(),
        orchestrator,
        Arc::new(LogCountdown::new()),
    ));

    info!("Starting scheduler");
    let runner = Arc::clone(&scheduler);
    let scheduler_task = tokio::spawn(async move { runner.run().await });

    shutdown_signal().await;
    info!("Shutdown signal received, stopping after any in-flight cycle");
    scheduler.shutdown();

    scheduler_task.await.context("Scheduler task panicked")?;
    info!("radarsweep stopped");

    Ok(())
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
