use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn add_liked_recipe(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
    Json(body): Json<LikedRecipeRequestBody>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    state
        .user_service
        .add_liked_recipe(authenticated.user_id, body.recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        MessageData {
            message: "Recipe added to liked list",
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LikedRecipeRequestBody {
    recipe_id: i64,
}
