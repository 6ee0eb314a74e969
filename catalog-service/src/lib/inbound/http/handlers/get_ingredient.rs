use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::ingredient::models::IngredientDetails;
use crate::domain::ingredient::ports::IngredientServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_ingredient(
    State(state): State<AppState>,
    Path(ingredient_id): Path<String>,
) -> Result<ApiSuccess<IngredientDetails>, ApiError> {
    let ingredient_id: i64 = ingredient_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid ingredient ID".to_string()))?;

    state
        .ingredient_service
        .ingredient_details(ingredient_id)
        .await
        .map_err(ApiError::from)
        .map(|details| ApiSuccess::new(StatusCode::OK, details))
}
