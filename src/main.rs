use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{Level, info, warn};
use tracing_subscriber::fmt::format::FmtSpan;

use web2_reputation::{
    GatewayConfig, ReputationAggregator,
    api::{ReputationApiState, create_app},
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Arc::new(GatewayConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {:#}", e);
        eprintln!("Please check environment variables.");
        e
    })?);

    init_logging(&config)?;

    info!("Starting Web2 reputation gateway");
    info!(
        "Upstreams: github={}, stackexchange={} (site={}), helius={}",
        config.upstream.github_api_url,
        config.upstream.stackexchange_api_url,
        config.upstream.stackexchange_site,
        config.upstream.helius_rpc_url
    );
    match config.upstream.masked_api_key() {
        Some(masked) => info!("Helius API key loaded: {}", masked),
        None => warn!("HELIUS_API_KEY not set - solana lookups will return an error field"),
    }

    let aggregator = ReputationAggregator::from_config(&config)
        .context("Failed to initialize upstream adapters")?;
    let app = create_app(&config, ReputationApiState::new(aggregator));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", bind_addr, e))?;

    info!("Reputation gateway listening on {}", bind_addr);
    info!(
        "CORS={}, Max body={}KB, Upstream timeout={}s",
        config.security.enable_cors,
        config.security.max_request_size / 1024,
        config.upstream.timeout_secs
    );

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging(config: &GatewayConfig) -> Result<()> {
    let log_level = match config.logging.level.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(if config.logging.log_requests {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        })
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set logging subscriber: {}", e))?;

    Ok(())
}
