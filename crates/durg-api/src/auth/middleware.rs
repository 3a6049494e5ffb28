// Authentication error type and the admin bearer-token extractor
// Decision: admin endpoints answer 401 for both missing and non-admin
// credentials, so callers cannot probe which accounts are admins

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::AppState;

/// Authentication error
#[derive(Debug, Clone, Serialize)]
pub struct AuthError {
    pub error: String,
    #[serde(skip)]
    pub status: StatusCode,
}

impl AuthError {
    pub fn unauthorized(message: &str) -> Self {
        Self {
            error: message.to_string(),
            status: StatusCode::UNAUTHORIZED,
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self {
            error: message.to_string(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn internal(message: &str) -> Self {
        Self {
            error: message.to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Extractor requiring an admin bearer token.
///
/// Reads `Authorization: Bearer <token>`, verifies it, and rejects anything
/// that does not resolve to an admin principal.
#[derive(Debug, Clone, Copy)]
pub struct AdminBearer(pub Uuid);

#[axum::async_trait]
impl<S> FromRequestParts<S> for AdminBearer
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| AuthError::unauthorized("Unauthorized"))?;

        let principal = app_state
            .tokens
            .verify(token)
            .ok_or_else(|| AuthError::unauthorized("Unauthorized"))?;

        if !principal.is_admin() {
            return Err(AuthError::unauthorized("Unauthorized"));
        }

        Ok(AdminBearer(principal.id()))
    }
}
