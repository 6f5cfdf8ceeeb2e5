use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use carbon_portfolio_core::{compute_summary, Position, PortfolioSummary, StatusFilter};
use carbon_portfolio_data::PositionRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize)]
pub struct PositionListResponse {
    pub positions: Vec<Position>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Optional `?status=` query parameter. An unrecognized value fails
/// deserialization, which axum surfaces as 400 Bad Request; a missing
/// parameter falls back to `StatusFilter::All`.
#[derive(Deserialize)]
pub struct StatusQuery {
    #[serde(default)]
    pub status: StatusFilter,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Lists positions, optionally filtered by status.
///
/// # Errors
/// Returns `StatusCode::INTERNAL_SERVER_ERROR` if the repository cannot be read.
pub async fn list_positions(
    State(repository): State<Arc<dyn PositionRepository>>,
    Query(params): Query<StatusQuery>,
) -> Result<Json<PositionListResponse>, StatusCode> {
    let positions = repository
        .find_by_status(params.status)
        .await
        .map_err(|err| {
            tracing::error!("Failed to list positions: {err:#}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(PositionListResponse { positions }))
}

/// Computes the portfolio summary over the filtered position set.
///
/// # Errors
/// Returns `StatusCode::INTERNAL_SERVER_ERROR` if the repository cannot be read.
pub async fn get_summary(
    State(repository): State<Arc<dyn PositionRepository>>,
    Query(params): Query<StatusQuery>,
) -> Result<Json<PortfolioSummary>, StatusCode> {
    let positions = repository
        .find_by_status(params.status)
        .await
        .map_err(|err| {
            tracing::error!("Failed to load positions for summary: {err:#}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(compute_summary(&positions)))
}
