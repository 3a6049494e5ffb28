use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::config::AppConfig;

/// JWT claims for session tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (principal id)
    pub sub: String,
    /// Admin flag
    #[serde(rename = "isAdmin", default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    /// Legacy admin marker from older tokens ("admin")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Issued at (unix timestamp)
    pub iat: i64,
    /// Expiration (unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// True when either the current or the legacy claim shape marks an admin
    pub fn marks_admin(&self) -> bool {
        self.is_admin == Some(true) || self.role.as_deref() == Some("admin")
    }
}

/// Verified session identity, resolved once at token verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    User(Uuid),
    Admin(Uuid),
}

impl Principal {
    pub fn id(&self) -> Uuid {
        match self {
            Principal::User(id) | Principal::Admin(id) => *id,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Principal::Admin(_))
    }
}

/// Service for issuing and verifying session tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime_secs: i64,
}

impl TokenService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            lifetime_secs: config.session_lifetime_secs(),
        }
    }

    /// Issue a signed session token for a principal
    pub fn issue(&self, principal_id: Uuid, is_admin: bool) -> anyhow::Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: principal_id.to_string(),
            is_admin: Some(is_admin),
            role: None,
            iat: now,
            exp: now + self.lifetime_secs,
        };
        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Verify a token and resolve the principal it names.
    ///
    /// Invalid tokens (malformed, expired, bad signature) are a normal
    /// outcome, not an error. Legacy tokens carrying `role: "admin"` resolve
    /// to the admin variant.
    pub fn verify(&self, token: &str) -> Option<Principal> {
        let validation = Validation::default();
        let data = match decode::<Claims>(token, &self.decoding_key, &validation) {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!("token verification failed: {}", e);
                return None;
            }
        };

        let id = match Uuid::parse_str(&data.claims.sub) {
            Ok(id) => id,
            Err(e) => {
                tracing::debug!("token subject is not a valid id: {}", e);
                return None;
            }
        };

        if data.claims.marks_admin() {
            Some(Principal::Admin(id))
        } else {
            Some(Principal::User(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        let config = AppConfig {
            jwt_secret: "test-secret".to_string(),
            ..Default::default()
        };
        TokenService::new(&config)
    }

    #[test]
    fn test_issue_and_verify_user() {
        let svc = service();
        let id = Uuid::now_v7();
        let token = svc.issue(id, false).unwrap();
        assert_eq!(svc.verify(&token), Some(Principal::User(id)));
    }

    #[test]
    fn test_issue_and_verify_admin() {
        let svc = service();
        let id = Uuid::now_v7();
        let token = svc.issue(id, true).unwrap();
        let principal = svc.verify(&token).unwrap();
        assert!(principal.is_admin());
        assert_eq!(principal.id(), id);
    }

    #[test]
    fn test_thirty_day_expiry() {
        let svc = service();
        let token = svc.issue(Uuid::now_v7(), false).unwrap();

        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(&[]),
            &validation,
        )
        .unwrap();
        assert_eq!(data.claims.exp - data.claims.iat, 30 * 24 * 60 * 60);
    }

    #[test]
    fn test_legacy_role_claim_resolves_to_admin() {
        let svc = service();
        let now = Utc::now().timestamp();
        let id = Uuid::now_v7();
        let claims = Claims {
            sub: id.to_string(),
            is_admin: None,
            role: Some("admin".to_string()),
            iat: now,
            exp: now + 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert_eq!(svc.verify(&token), Some(Principal::Admin(id)));
    }

    #[test]
    fn test_invalid_tokens_are_none() {
        let svc = service();

        // Malformed
        assert_eq!(svc.verify("not-a-token"), None);

        // Wrong signing key
        let other = TokenService::new(&AppConfig {
            jwt_secret: "other-secret".to_string(),
            ..Default::default()
        });
        let token = other.issue(Uuid::now_v7(), false).unwrap();
        assert_eq!(svc.verify(&token), None);

        // Expired
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::now_v7().to_string(),
            is_admin: Some(false),
            role: None,
            iat: now - 7200,
            exp: now - 3600,
        };
        let expired = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert_eq!(svc.verify(&expired), None);
    }
}
