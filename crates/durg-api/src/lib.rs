// Durg API: fort catalogue server with session auth

pub mod api;
pub mod auth;
pub mod catalogue;
pub mod pages;
pub mod storage;

use std::sync::Arc;

use axum::{routing::get, Router};
use utoipa::OpenApi;

use auth::config::AppConfig;
use auth::jwt::TokenService;
use storage::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub tokens: Arc<TokenService>,
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let tokens = Arc::new(TokenService::new(&config));
        Self {
            config,
            tokens,
            db: Arc::new(Database::new()),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        api::common::health,
        api::forts::list_forts,
        api::forts::get_fort,
        api::forts::create_fort,
        api::forts::update_fort,
        api::forts::delete_fort,
        api::forts::seed_forts,
        auth::routes::signup,
        auth::routes::login,
        auth::routes::admin_signup,
        auth::routes::admin_login,
        auth::routes::logout,
    ),
    components(
        schemas(
            storage::models::FortRow,
            storage::models::CreateFort,
            storage::models::UpdateFort,
            api::common::ErrorResponse,
            api::common::HealthResponse,
            api::forts::DeleteResponse,
            api::forts::SeedResponse,
            api::forts::SeedItemError,
            auth::routes::SignupRequest,
            auth::routes::AdminSignupRequest,
            auth::routes::LoginRequest,
            auth::routes::SessionResponse,
            auth::routes::AdminSessionResponse,
            auth::routes::LogoutResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "auth", description = "Sessions for visitors and admins"),
        (name = "forts", description = "Fort catalogue"),
    ),
    info(
        title = "Durg API",
        description = "Catalogue and session API for Maharashtra historic forts",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

/// Assemble the full application router.
///
/// API routes sit outside the page guard; pages are layered behind it.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::common::health))
        .merge(auth::routes::routes(state.clone()))
        .merge(api::forts::routes(state))
        .merge(pages::routes())
}
