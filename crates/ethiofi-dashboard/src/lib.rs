//! ethiofi Dashboard
//!
//! Serves the access forecast as an HTML dashboard: scenario selector,
//! target slider, overview metrics, scenario chart, comparison table,
//! progress toward target and a CSV download.

#![warn(missing_docs)]

pub mod cache;
pub mod chart;
pub mod config;
pub mod error;
pub mod forecast;
pub mod handlers;
pub mod render;
pub mod view;

pub use error::DashboardError;

use cache::ForecastCache;
use config::DashboardConfig;
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Start the Dashboard HTTP server
///
/// The forecast file is read on the first request that needs it.
pub async fn start_server(config: DashboardConfig) -> Result<(), DashboardError> {
    info!("Starting ethiofi Dashboard");
    info!("Bind address: {}", config.bind_addr());
    info!("Forecast file: {}", config.forecast_path.display());

    let state = AppState {
        cache: Arc::new(ForecastCache::new(config.forecast_path.clone())),
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Dashboard listening on http://{}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| DashboardError::Server(e.to_string()))?;

    Ok(())
}
