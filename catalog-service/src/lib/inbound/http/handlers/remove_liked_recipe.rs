use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn remove_liked_recipe(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
    Path(recipe_id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let recipe_id: i64 = recipe_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid recipe ID".to_string()))?;

    state
        .user_service
        .remove_liked_recipe(authenticated.user_id, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData {
            message: "Recipe removed from liked list",
        },
    ))
}
