use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::recipe::models::Recipe;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_liked_recipes(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<Recipe>>, ApiError> {
    state
        .user_service
        .liked_recipes(authenticated.user_id)
        .await
        .map_err(ApiError::from)
        .map(|recipes| ApiSuccess::new(StatusCode::OK, recipes))
}
