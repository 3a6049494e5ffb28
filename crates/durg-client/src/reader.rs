// Client-side session reader
// Decision: the signing key never leaves the server, so the client decodes
// the token without verifying the signature and only checks the embedded
// expiry; the server re-verifies on every API call anyway

use chrono::Utc;
use durg_api::auth::config::AppEnv;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[serde(rename = "isAdmin", default)]
    is_admin: Option<bool>,
    #[serde(default)]
    role: Option<String>,
    exp: i64,
}

/// What the client knows about the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientSession {
    Anonymous,
    Authenticated { id: Uuid, is_admin: bool },
}

impl ClientSession {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, ClientSession::Authenticated { .. })
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, ClientSession::Authenticated { is_admin: true, .. })
    }
}

/// Reconstructs session state from a stored token.
///
/// Not cached: every call re-reads the token, so navigation always sees the
/// current state.
pub struct SessionReader {
    dev_mode: bool,
}

impl SessionReader {
    pub fn new(dev_mode: bool) -> Self {
        Self { dev_mode }
    }

    /// Build from `APP_ENV`, enabling the bypass only in development.
    ///
    /// Uses the same environment parsing as the server, so both sides agree
    /// on what counts as development.
    pub fn from_env() -> Self {
        Self::new(dev_mode_from(std::env::var("APP_ENV").ok().as_deref()))
    }

    /// Read the session out of a token, if any.
    ///
    /// In development mode this reports an authenticated session regardless
    /// of the token, matching the local-dev bypass.
    pub fn session(&self, token: Option<&str>) -> ClientSession {
        if self.dev_mode {
            return ClientSession::Authenticated {
                id: Uuid::nil(),
                is_admin: true,
            };
        }

        let Some(token) = token else {
            return ClientSession::Anonymous;
        };

        match decode_unverified(token) {
            Some(claims) if claims.exp > Utc::now().timestamp() => {
                match Uuid::parse_str(&claims.sub) {
                    Ok(id) => ClientSession::Authenticated {
                        id,
                        is_admin: claims.is_admin == Some(true)
                            || claims.role.as_deref() == Some("admin"),
                    },
                    Err(_) => ClientSession::Anonymous,
                }
            }
            _ => ClientSession::Anonymous,
        }
    }
}

fn dev_mode_from(value: Option<&str>) -> bool {
    let env: AppEnv = value
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();
    env == AppEnv::Development
}

fn decode_unverified(token: &str) -> Option<Claims> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;

    match decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            tracing::debug!("failed to decode stored token: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    fn make_token(claims: serde_json::Value) -> String {
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"some-server-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_reads_as_authenticated() {
        let id = Uuid::now_v7();
        let token = make_token(json!({
            "sub": id.to_string(),
            "isAdmin": false,
            "iat": Utc::now().timestamp(),
            "exp": Utc::now().timestamp() + 3600,
        }));

        let reader = SessionReader::new(false);
        assert_eq!(
            reader.session(Some(&token)),
            ClientSession::Authenticated { id, is_admin: false }
        );
    }

    #[test]
    fn test_expired_token_is_anonymous() {
        let token = make_token(json!({
            "sub": Uuid::now_v7().to_string(),
            "isAdmin": false,
            "iat": Utc::now().timestamp() - 7200,
            "exp": Utc::now().timestamp() - 3600,
        }));

        let reader = SessionReader::new(false);
        assert_eq!(reader.session(Some(&token)), ClientSession::Anonymous);
    }

    #[test]
    fn test_garbage_and_missing_tokens_are_anonymous() {
        let reader = SessionReader::new(false);
        assert_eq!(reader.session(Some("garbage")), ClientSession::Anonymous);
        assert_eq!(reader.session(None), ClientSession::Anonymous);
    }

    #[test]
    fn test_legacy_role_claim_marks_admin() {
        let token = make_token(json!({
            "sub": Uuid::now_v7().to_string(),
            "role": "admin",
            "iat": Utc::now().timestamp(),
            "exp": Utc::now().timestamp() + 3600,
        }));

        let reader = SessionReader::new(false);
        assert!(reader.session(Some(&token)).is_admin());
    }

    #[test]
    fn test_env_flag_parsing_matches_the_server() {
        // Everything short of explicit production is development, unset included
        assert!(dev_mode_from(Some("development")));
        assert!(dev_mode_from(Some("dev")));
        assert!(dev_mode_from(None));
        assert!(!dev_mode_from(Some("production")));
        assert!(!dev_mode_from(Some("PROD")));
    }

    #[test]
    fn test_dev_mode_bypasses_the_check() {
        let reader = SessionReader::new(true);
        let session = reader.session(None);
        assert!(session.is_authenticated());
        assert_eq!(
            session,
            ClientSession::Authenticated {
                id: Uuid::nil(),
                is_admin: true
            }
        );
    }
}
