// Session routes: signup, login, logout for visitors and admins
// Decision: login failures are uniform 401s; the response never reveals
// whether the email exists

use axum::{extract::State, response::IntoResponse, routing::post, Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::middleware::AuthError;
use super::{ADMIN_COOKIE, USER_COOKIE};
use crate::storage::models::{CreateAdmin, CreateUser};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdminSignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminSessionResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub token: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Session routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/signup", post(signup))
        .route("/api/login", post(login))
        .route("/api/admin/signup", post(admin_signup))
        .route("/api/admin/login", post(admin_login))
        .route("/api/logout", post(logout))
        .with_state(state)
}

/// Build the HTTP-only session cookie
fn session_cookie(state: &AppState, name: &'static str, token: String) -> Cookie<'static> {
    Cookie::build((name, token))
        .path("/")
        .http_only(true)
        .secure(!state.config.is_development())
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(state.config.session_lifetime_secs()))
        .build()
}

/// Register a new visitor account
#[utoipa::path(
    post,
    path = "/api/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created, session started", body = SessionResponse),
        (status = 400, description = "Email already registered"),
    ),
    tag = "auth"
)]
pub(crate) async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<SignupRequest>,
) -> Result<impl IntoResponse, AuthError> {
    if req.name.is_empty() || req.email.is_empty() || req.phone.is_empty() || req.password.is_empty()
    {
        return Err(AuthError::bad_request("All fields are required"));
    }

    let user = state
        .db
        .create_user(CreateUser {
            name: req.name,
            email: req.email,
            phone: req.phone,
            password: req.password,
        })
        .map_err(|e| {
            tracing::error!("failed to create user: {}", e);
            AuthError::internal("Something went wrong")
        })?
        .ok_or_else(|| AuthError::bad_request("User with this email already exists"))?;

    let token = state.tokens.issue(user.id, false).map_err(|e| {
        tracing::error!("failed to issue token: {}", e);
        AuthError::internal("Something went wrong")
    })?;

    let jar = jar.add(session_cookie(&state, USER_COOKIE, token.clone()));
    Ok((
        jar,
        Json(SessionResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            token,
        }),
    ))
}

/// Log in with a visitor account
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session started", body = SessionResponse),
        (status = 401, description = "Invalid credentials"),
    ),
    tag = "auth"
)]
pub(crate) async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthError> {
    let user = state
        .db
        .find_user_by_email(&req.email)
        .ok_or_else(|| AuthError::unauthorized("Invalid email or password"))?;

    let ok = crate::storage::password::verify_password(&req.password, &user.password_hash)
        .map_err(|e| {
            tracing::error!("password verification failed: {}", e);
            AuthError::internal("Something went wrong")
        })?;
    if !ok {
        return Err(AuthError::unauthorized("Invalid email or password"));
    }

    let token = state.tokens.issue(user.id, false).map_err(|e| {
        tracing::error!("failed to issue token: {}", e);
        AuthError::internal("Something went wrong")
    })?;

    let jar = jar.add(session_cookie(&state, USER_COOKIE, token.clone()));
    Ok((
        jar,
        Json(SessionResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            token,
        }),
    ))
}

/// Register a new admin account
#[utoipa::path(
    post,
    path = "/api/admin/signup",
    request_body = AdminSignupRequest,
    responses(
        (status = 200, description = "Admin account created, session started", body = AdminSessionResponse),
        (status = 400, description = "Email already registered"),
    ),
    tag = "auth"
)]
pub(crate) async fn admin_signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<AdminSignupRequest>,
) -> Result<impl IntoResponse, AuthError> {
    if req.name.is_empty() || req.email.is_empty() || req.password.is_empty() {
        return Err(AuthError::bad_request("All fields are required"));
    }

    let admin = state
        .db
        .create_admin(CreateAdmin {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .map_err(|e| {
            tracing::error!("failed to create admin: {}", e);
            AuthError::internal("Something went wrong")
        })?
        .ok_or_else(|| AuthError::bad_request("Admin with this email already exists"))?;

    let token = state.tokens.issue(admin.id, true).map_err(|e| {
        tracing::error!("failed to issue token: {}", e);
        AuthError::internal("Something went wrong")
    })?;

    let jar = jar.add(session_cookie(&state, ADMIN_COOKIE, token.clone()));
    Ok((
        jar,
        Json(AdminSessionResponse {
            id: admin.id,
            name: admin.name,
            email: admin.email,
            token,
            is_admin: true,
        }),
    ))
}

/// Log in with an admin account
#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Admin session started", body = AdminSessionResponse),
        (status = 401, description = "Invalid credentials"),
    ),
    tag = "auth"
)]
pub(crate) async fn admin_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthError> {
    let admin = state
        .db
        .find_admin_by_email(&req.email)
        .ok_or_else(|| AuthError::unauthorized("Invalid email or password"))?;

    let ok = crate::storage::password::verify_password(&req.password, &admin.password_hash)
        .map_err(|e| {
            tracing::error!("password verification failed: {}", e);
            AuthError::internal("Something went wrong")
        })?;
    if !ok {
        return Err(AuthError::unauthorized("Invalid email or password"));
    }

    let token = state.tokens.issue(admin.id, true).map_err(|e| {
        tracing::error!("failed to issue token: {}", e);
        AuthError::internal("Something went wrong")
    })?;

    let jar = jar.add(session_cookie(&state, ADMIN_COOKIE, token.clone()));
    Ok((
        jar,
        Json(AdminSessionResponse {
            id: admin.id,
            name: admin.name,
            email: admin.email,
            token,
            is_admin: true,
        }),
    ))
}

/// End the session by clearing both session cookies
#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 200, description = "Session cookies removed", body = LogoutResponse),
    ),
    tag = "auth"
)]
pub(crate) async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar
        .remove(Cookie::build(USER_COOKIE).path("/"))
        .remove(Cookie::build(ADMIN_COOKIE).path("/"));
    (jar, Json(LogoutResponse { success: true }))
}
