// Page shells served behind the route guard.
// The real page markup is rendered by the frontend; these handlers exist so
// navigation and guard redirects have concrete targets.

use axum::{middleware, response::Html, routing::get, Router};

use crate::auth::guard::page_guard;

fn shell(title: &str) -> Html<String> {
    Html(format!(
        "<!doctype html><html><head><title>{title} — Durg</title></head>\
         <body><div id=\"app\" data-page=\"{title}\"></div></body></html>"
    ))
}

async fn home() -> Html<String> {
    shell("Home")
}

async fn login() -> Html<String> {
    shell("Login")
}

async fn signup() -> Html<String> {
    shell("Sign Up")
}

async fn dashboard() -> Html<String> {
    shell("Dashboard")
}

async fn admin_home() -> Html<String> {
    shell("Admin")
}

async fn admin_login() -> Html<String> {
    shell("Admin Login")
}

async fn admin_signup() -> Html<String> {
    shell("Admin Sign Up")
}

async fn admin_dashboard() -> Html<String> {
    shell("Admin Dashboard")
}

/// Page routes, wrapped in the session guard
pub fn routes() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login))
        .route("/signup", get(signup))
        .route("/dashboard", get(dashboard))
        .route("/admin", get(admin_home))
        .route("/admin/login", get(admin_login))
        .route("/admin/signup", get(admin_signup))
        .route("/admin/dashboard", get(admin_dashboard))
        .layer(middleware::from_fn(page_guard))
}
