//! HTTP request handlers for the Dashboard.
//!
//! Serves the dashboard page, the raw forecast download and a health check.

use crate::cache::ForecastCache;
use crate::chart::render_forecast_svg;
use crate::error::DashboardError;
use crate::forecast::Scenario;
use crate::render::render_page;
use crate::view::{DashboardView, TargetRate};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router as AxumRouter,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// File name offered for the CSV download
pub const DOWNLOAD_FILE_NAME: &str = "task4_access_forecast.csv";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Forecast loaded once per process
    pub cache: Arc<ForecastCache>,
}

/// Query parameters of the dashboard page
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Selected scenario (default base)
    #[serde(default)]
    pub scenario: Scenario,
    /// Target percent (default 60)
    pub target: Option<i64>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Whether the forecast has been loaded
    pub forecast_loaded: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Rejected request parameter
    BadRequest(String),
    /// Forecast loading or rendering failed
    Dashboard(DashboardError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Dashboard(e) => {
                error!("Dashboard error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<DashboardError> for AppError {
    fn from(e: DashboardError) -> Self {
        match e {
            DashboardError::InvalidTarget(_) => AppError::BadRequest(e.to_string()),
            other => AppError::Dashboard(other),
        }
    }
}

/// GET / - Render the dashboard for the selected scenario and target
async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, AppError> {
    let target = match query.target {
        Some(percent) => TargetRate::new(percent)?,
        None => TargetRate::default(),
    };

    let table = state.cache.get()?;
    let target_value = f64::from(target.percent());
    let view = DashboardView::compute(&table, query.scenario, target_value)?;
    let chart = render_forecast_svg(&table, target_value)?;

    Ok(Html(render_page(&view, target, &chart)))
}

/// GET /download - The forecast CSV exactly as read
async fn download(State(state): State<AppState>) -> Result<Response, AppError> {
    let table = state.cache.get()?;
    let disposition = format!("attachment; filename=\"{}\"", DOWNLOAD_FILE_NAME);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        table.raw.clone(),
    )
        .into_response())
}

/// GET /health - Liveness and cache state
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        forecast_loaded: state.cache.is_loaded(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/", get(dashboard))
        .route("/download", get(download))
        .route("/health", get(health_check))
        .with_state(state)
}
