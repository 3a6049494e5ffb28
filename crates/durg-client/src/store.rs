// Token storage behind a single accessor
// Decision: writes fan out to both backends; reads prefer the cookie copy
// so the value the route guard sees is the value the client reports

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

const TOKEN_KEY: &str = "token";
const COOKIE_EXPIRY_DAYS: i64 = 30;

/// Read/write/clear contract for a token storage backend
pub trait SessionStore: Send + Sync {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str);
    fn clear(&self);
}

/// Local-storage-style backend: persistent key/value, no expiry of its own
#[derive(Default)]
pub struct LocalStorageAdapter {
    entries: RwLock<HashMap<String, String>>,
}

impl LocalStorageAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for LocalStorageAdapter {
    fn read(&self) -> Option<String> {
        self.entries.read().get(TOKEN_KEY).cloned()
    }

    fn write(&self, token: &str) {
        self.entries
            .write()
            .insert(TOKEN_KEY.to_string(), token.to_string());
    }

    fn clear(&self) {
        self.entries.write().remove(TOKEN_KEY);
    }
}

struct CookieEntry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Script-readable cookie backend with a 30-day expiry per write
#[derive(Default)]
pub struct CookieAdapter {
    entry: RwLock<Option<CookieEntry>>,
}

impl CookieAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for CookieAdapter {
    fn read(&self) -> Option<String> {
        let entry = self.entry.read();
        match entry.as_ref() {
            Some(e) if e.expires_at > Utc::now() => Some(e.value.clone()),
            _ => None,
        }
    }

    fn write(&self, token: &str) {
        *self.entry.write() = Some(CookieEntry {
            value: token.to_string(),
            expires_at: Utc::now() + Duration::days(COOKIE_EXPIRY_DAYS),
        });
    }

    fn clear(&self) {
        *self.entry.write() = None;
    }
}

/// Single entry point for session token storage.
///
/// Every write lands in both backends; reads prefer the cookie, falling back
/// to local storage; clearing tears both down together.
#[derive(Clone)]
pub struct SessionAccessor {
    cookie: Arc<dyn SessionStore>,
    local: Arc<dyn SessionStore>,
}

impl SessionAccessor {
    pub fn new() -> Self {
        Self {
            cookie: Arc::new(CookieAdapter::new()),
            local: Arc::new(LocalStorageAdapter::new()),
        }
    }

    pub fn with_stores(cookie: Arc<dyn SessionStore>, local: Arc<dyn SessionStore>) -> Self {
        Self { cookie, local }
    }

    pub fn token(&self) -> Option<String> {
        self.cookie.read().or_else(|| self.local.read())
    }

    pub fn set_token(&self, token: &str) {
        self.cookie.write(token);
        self.local.write(token);
    }

    pub fn clear(&self) {
        self.cookie.clear();
        self.local.clear();
    }
}

impl Default for SessionAccessor {
    fn default() -> Self {
        Self::new()
    }
}
