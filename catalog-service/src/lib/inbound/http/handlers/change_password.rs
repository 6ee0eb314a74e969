use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::user::models::ChangePasswordCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn change_password(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
    Json(body): Json<ChangePasswordRequestBody>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    if body.new_password.is_empty() {
        return Err(ApiError::UnprocessableEntity(
            "New password must not be empty".to_string(),
        ));
    }

    state
        .user_service
        .change_password(
            authenticated.user_id,
            ChangePasswordCommand {
                current_password: body.current_password,
                new_password: body.new_password,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData {
            message: "Password updated",
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangePasswordRequestBody {
    current_password: String,
    new_password: String,
}
