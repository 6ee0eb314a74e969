use std::collections::HashSet;

use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::recipe::models::ShoppingList;
use crate::domain::recipe::ports::RecipeServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_shopping_list(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
    Query(params): Query<ShoppingListParams>,
) -> Result<ApiSuccess<ShoppingList>, ApiError> {
    let recipe_id: i64 = recipe_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid recipe ID".to_string()))?;

    let have: HashSet<i64> = params
        .have_ingredients
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .filter_map(|id| id.trim().parse().ok())
        .collect();

    state
        .recipe_service
        .shopping_list(recipe_id, &have)
        .await
        .map_err(ApiError::from)
        .map(|list| ApiSuccess::new(StatusCode::OK, list))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShoppingListParams {
    have_ingredients: Option<String>,
}
