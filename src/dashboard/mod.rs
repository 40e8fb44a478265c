//! Web dashboard.
//!
//! Provides:
//! - `/` - scan form, history table and score chart
//! - `/scan` - runs a scan (form POST) and renders the detailed report
//! - `/report.pdf` - PDF of the last successful scan
//! - `/clear` - clears the history (POST)
//! - `/api/history` - recent history as JSON

mod chart;
mod handlers;
mod templates;
mod types;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;

use crate::config::Config;
use handlers::{api_history, clear, index, report_pdf, scan};

pub use chart::render_score_chart;
pub use types::DashboardState;

/// Builds the dashboard router around `state`.
pub fn router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/scan", post(scan))
        .route("/report.pdf", get(report_pdf))
        .route("/clear", post(clear))
        .route("/api/history", get(api_history))
        .with_state(state)
}

/// Creates the history table if needed and serves the dashboard until shutdown.
pub async fn serve(config: &Config) -> Result<(), anyhow::Error> {
    let state = DashboardState::new(config).context("Failed to initialize dashboard")?;
    state
        .store()
        .init()
        .await
        .context("Failed to initialize history store")?;

    let port = config.dashboard_port;
    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind dashboard to port {}: {}", port, e))?;

    log::info!("Dashboard listening on http://127.0.0.1:{}/", port);

    axum::serve(listener, router(state))
        .await
        .map_err(|e| anyhow::anyhow!("Dashboard server error: {}", e))?;

    Ok(())
}
