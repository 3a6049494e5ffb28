// Authentication: configuration, token service, extractors, session routes,
// and the page route guard

pub mod config;
pub mod guard;
pub mod jwt;
pub mod middleware;
pub mod routes;

/// Cookie carrying the visitor session token
pub const USER_COOKIE: &str = "token";
/// Cookie carrying the admin session token
pub const ADMIN_COOKIE: &str = "auth_token";
