pub mod errors;
pub mod rate_limit;
pub mod routes;
pub mod schemas;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Config;
use crate::page::{PageContext, ShareText};
use crate::share::WindowFeatures;
use rate_limit::RateLimiter;

/// Values shared by every request.
#[derive(Debug)]
pub struct ServerState {
    pub text: ShareText,
    pub popup: WindowFeatures,
    pub site: PageContext,
    pub toast_duration_ms: u64,
    pub static_dir: PathBuf,
    pub request_timeout: Duration,
    pub limiter: RateLimiter,
}

impl ServerState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            text: config.share_text(),
            popup: config.popup(),
            site: config.site_page(),
            toast_duration_ms: config.toast_duration_ms,
            static_dir: config.server.static_dir.clone(),
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
            limiter: RateLimiter::per_minute(config.server.requests_per_minute),
        }
    }
}

pub async fn run(config: &Config, port: u16) -> Result<()> {
    let state = Arc::new(ServerState::from_config(config));
    let app = routes::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(listen_addr = %addr, "Started server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down server");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
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
