use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the verified identity of a request.
///
/// Set once here, read explicitly by handlers; request-scoped only.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that rejects requests without a valid bearer token.
///
/// Every verification failure (bad format, bad signature, expired)
/// produces the same response; the specific cause is only logged.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let header_value = authorization_header(&req).ok_or_else(|| {
        ApiError::Unauthorized("Missing Authorization header".to_string()).into_response()
    })?;

    let authenticated = verify_header(&state, header_value)?;

    req.extensions_mut().insert(authenticated);
    Ok(next.run(req).await)
}

/// Middleware that attaches an identity when a valid token is present
/// but never rejects.
///
/// Used by endpoints that personalize for logged-in users while staying
/// functional for anonymous ones.
pub async fn optional_auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    if let Some(header_value) = authorization_header(&req) {
        match verify_header(&state, header_value) {
            Ok(authenticated) => {
                req.extensions_mut().insert(authenticated);
            }
            Err(_) => {
                tracing::debug!("Ignoring invalid token on optional-auth route");
            }
        }
    }

    next.run(req).await
}

fn authorization_header(req: &Request) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

fn verify_header(state: &AppState, header_value: String) -> Result<AuthenticatedUser, Response> {
    // The token layer itself strips an optional "Bearer " prefix, so
    // the header value is passed through untouched.
    let claims = state
        .authenticator
        .validate_token(&header_value)
        .map_err(|e| {
            tracing::warn!(error = %e, "Token verification failed");
            unauthenticated()
        })?;

    let user_id = UserId::from_string(&claims.user_id).map_err(|e| {
        tracing::warn!(error = %e, "Token carried an unparseable user id");
        unauthenticated()
    })?;

    Ok(AuthenticatedUser { user_id })
}

fn unauthenticated() -> Response {
    ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
}
