// Route guard for page navigation
// Decision: presence check only; an expired cookie passes here and is caught
// by token verification on the API side or the client session reader

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use super::USER_COOKIE;

/// How the guard treats a page path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathClass {
    /// Login/signup pages: bounce already-authenticated visitors away
    AuthPage,
    /// Open to everyone
    Public,
    /// Admin area: passes the guard, the admin check happens client-side
    AdminGated,
    /// Requires a session cookie
    Protected,
}

fn classify(path: &str) -> PathClass {
    match path {
        "/login" | "/signup" => PathClass::AuthPage,
        "/" | "/admin/login" | "/admin/signup" => PathClass::Public,
        _ if path == "/admin" || path.starts_with("/admin/") => PathClass::AdminGated,
        _ => PathClass::Protected,
    }
}

/// Middleware layered over the page router (API routes are not behind it)
pub async fn page_guard(jar: CookieJar, req: Request, next: Next) -> Response {
    let has_session = jar.get(USER_COOKIE).is_some();

    match classify(req.uri().path()) {
        PathClass::AuthPage if has_session => Redirect::to("/dashboard").into_response(),
        PathClass::Protected if !has_session => Redirect::to("/login").into_response(),
        _ => next.run(req).await,
    }
}
