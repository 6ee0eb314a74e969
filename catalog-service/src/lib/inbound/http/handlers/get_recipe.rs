use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::recipe::models::RecipeDetails;
use crate::domain::recipe::ports::RecipeServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_recipe(
    State(state): State<AppState>,
    viewer: Option<Extension<AuthenticatedUser>>,
    Path(recipe_id): Path<String>,
) -> Result<ApiSuccess<RecipeDetails>, ApiError> {
    let recipe_id: i64 = recipe_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid recipe ID".to_string()))?;

    let viewer = viewer.map(|Extension(authenticated)| authenticated.user_id);

    state
        .recipe_service
        .recipe_details(recipe_id, viewer)
        .await
        .map_err(ApiError::from)
        .map(|details| ApiSuccess::new(StatusCode::OK, details))
}
