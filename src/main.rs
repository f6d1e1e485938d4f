use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use servicecatalog_mock::{AppConfig, app};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// In-memory Service Catalog endpoint for exercising AWS clients locally.
#[derive(Debug, Parser)]
#[command(name = "servicecatalog-mock", version, about)]
struct Cli {
    /// Address to listen on (overrides SC_MOCK_BIND_ADDR)
    #[arg(long)]
    bind_addr: Option<SocketAddr>,

    /// Region used for requests that name none (overrides SC_MOCK_DEFAULT_REGION)
    #[arg(long)]
    default_region: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env().context("failed to load configuration")?;
    if let Some(bind_addr) = cli.bind_addr {
        config = config.bind_addr(bind_addr);
    }
    if let Some(region) = cli.default_region.as_deref() {
        config = config.default_region(region);
    }
    config.validate().context("invalid configuration")?;

    let router = app(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(
        bind_addr = %config.bind_addr,
        default_region = %config.default_region,
        regions = config.regions.len(),
        "service catalog mock started"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("servicecatalog_mock=debug,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "unable to install ctrl+c handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "unable to install sigterm handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
