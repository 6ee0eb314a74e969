use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::register::UserData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::UsernameError;

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
    Json(body): Json<UpdateProfileRequestBody>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    state
        .user_service
        .update_profile(authenticated.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateProfileRequestBody {
    username: String,
    email: String,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateProfileRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl UpdateProfileRequestBody {
    fn try_into_command(self) -> Result<UpdateProfileCommand, ParseUpdateProfileRequestError> {
        Ok(UpdateProfileCommand {
            username: Username::new(self.username)?,
            email: EmailAddress::new(self.email)?,
        })
    }
}

impl From<ParseUpdateProfileRequestError> for ApiError {
    fn from(err: ParseUpdateProfileRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
