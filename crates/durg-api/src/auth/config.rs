// Application configuration loaded from environment variables.
// Decision: Default to development mode locally (insecure cookies, client auth bypass)
// Decision: 30-day sessions, matching the token expiry

use std::time::Duration;

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    /// Local development (cookies not `secure`, client-side auth bypass active)
    #[default]
    Development,
    /// Deployed build
    Production,
}

impl std::str::FromStr for AppEnv {
    type Err = std::convert::Infallible;

    // Anything that is not explicitly production counts as development
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "production" | "prod" => AppEnv::Production,
            _ => AppEnv::Development,
        })
    }
}

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub env: AppEnv,
    /// Secret key for signing session tokens
    pub jwt_secret: String,
    /// Session (cookie and token) lifetime
    pub session_lifetime: Duration,
    /// Address the HTTP server binds to
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: AppEnv::Development,
            jwt_secret: String::new(),
            session_lifetime: Duration::from_secs(30 * 24 * 60 * 60), // 30 days
            bind_addr: "0.0.0.0:3000".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let env: AppEnv = std::env::var("APP_ENV")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        let jwt_secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                if env == AppEnv::Development {
                    // Generate a random secret for dev mode
                    use rand::Rng;
                    let bytes: [u8; 32] = rand::thread_rng().gen();
                    hex::encode(bytes)
                } else {
                    tracing::warn!(
                        "JWT_SECRET not set, using insecure default; do not run this in production"
                    );
                    "your-secret-key".to_string()
                }
            });

        let session_lifetime = std::env::var("SESSION_MAX_AGE_DAYS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(|days: u64| Duration::from_secs(days * 24 * 60 * 60))
            .unwrap_or_else(|| Duration::from_secs(30 * 24 * 60 * 60));

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Self {
            env,
            jwt_secret,
            session_lifetime,
            bind_addr,
        }
    }

    /// Check if running in local development mode
    pub fn is_development(&self) -> bool {
        self.env == AppEnv::Development
    }

    /// Session lifetime in whole seconds
    pub fn session_lifetime_secs(&self) -> i64 {
        self.session_lifetime.as_secs() as i64
    }
}
