use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use teen_health_client::config::Config;
use teen_health_client::http_client::ReqwestGuidanceClient;
use teen_health_client::middleware::LoggingGuidance;
use teen_health_client::GuidanceClient;
use teen_health_server::{AppState, app};

/// Resolve the listen address, defaulting to localhost:5000.
fn listen_addr_from(raw: Option<String>) -> SocketAddr {
    raw.and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 5000)))
}


#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Configure logging from env var `TEEN_HEALTH_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("TEEN_HEALTH_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(log_env.clone())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!(%log_env, "teen_health_server: log filter");

    let handle = PrometheusBuilder::new().install_recorder()?;

    let config = Config::from_env()?;
    if config.has_api_key() {
        info!(model = %config.model, "Groq API key loaded; AI guidance enabled");
    } else {
        tracing::warn!(
            "GROQ_API_KEY not set; every request will receive the fallback guidance (get a key at https://console.groq.com)"
        );
    }

    let client: Arc<dyn GuidanceClient> =
        Arc::new(LoggingGuidance::new(ReqwestGuidanceClient::new(&config)));
    let state = AppState::new(client).with_metrics(handle);
    let router = app(state);

    let addr = listen_addr_from(std::env::var("ADDRESS").ok());
    info!(%addr, "starting HTTP server");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    let server = axum::serve(listener, router.into_make_service());
    if let Err(e) = server
        .with_graceful_shutdown(async {
            if let Err(e) = signal::ctrl_c().await {
                tracing::error!("failed to install ctrl+c handler: {e}");
            }
        })
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
