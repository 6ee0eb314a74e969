use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::stats::models::CatalogStats;
use crate::domain::stats::ports::StatsServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_stats(State(state): State<AppState>) -> Result<ApiSuccess<CatalogStats>, ApiError> {
    state
        .stats_service
        .catalog_stats()
        .await
        .map_err(ApiError::from)
        .map(|stats| ApiSuccess::new(StatusCode::OK, stats))
}
