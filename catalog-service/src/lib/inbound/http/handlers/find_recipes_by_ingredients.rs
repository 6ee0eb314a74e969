use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::list_recipes::parse_positive;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::recipe::models::MatchMode;
use crate::domain::recipe::models::MatchedRecipe;
use crate::domain::recipe::ports::RecipeServicePort;
use crate::inbound::http::router::AppState;

pub async fn find_recipes_by_ingredients(
    State(state): State<AppState>,
    Query(params): Query<FindByIngredientsParams>,
) -> Result<ApiSuccess<Vec<MatchedRecipe>>, ApiError> {
    let ingredients = params.ingredients.ok_or_else(|| {
        ApiError::BadRequest("Missing required parameter: ingredients".to_string())
    })?;

    // Entries that fail to parse are skipped rather than rejected.
    let ingredient_ids: Vec<i64> = ingredients
        .split(',')
        .filter_map(|id| id.trim().parse().ok())
        .collect();

    if ingredient_ids.is_empty() {
        return Err(ApiError::BadRequest("Invalid ingredient IDs".to_string()));
    }

    let mode = MatchMode::parse(params.match_type.as_deref().unwrap_or_default());
    let limit = parse_positive(params.limit.as_deref()).unwrap_or(10);

    state
        .recipe_service
        .find_by_ingredients(&ingredient_ids, mode, limit)
        .await
        .map_err(ApiError::from)
        .map(|matches| ApiSuccess::new(StatusCode::OK, matches))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindByIngredientsParams {
    ingredients: Option<String>,
    match_type: Option<String>,
    limit: Option<String>,
}
