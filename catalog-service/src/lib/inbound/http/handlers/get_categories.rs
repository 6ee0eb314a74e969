use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::stats::models::CategoryCounts;
use crate::domain::stats::ports::StatsServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<ApiSuccess<CategoryCounts>, ApiError> {
    state
        .stats_service
        .category_counts()
        .await
        .map_err(ApiError::from)
        .map(|counts| ApiSuccess::new(StatusCode::OK, counts))
}
