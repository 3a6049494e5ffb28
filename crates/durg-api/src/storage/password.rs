// Argon2id hashing for stored credentials; every hash gets a fresh OsRng salt

use anyhow::{anyhow, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a plaintext password for storage
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("password hashing failed: {}", e))?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored hash.
///
/// A mismatch is `Ok(false)`; only an unparseable stored hash is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| anyhow!("stored hash is malformed: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let hash = hash_password("killa@1630").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("killa@1630", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_is_ok_false() {
        let hash = hash_password("killa@1630").unwrap();
        assert!(!verify_password("killa@1631", &hash).unwrap());
        assert!(!verify_password("", &hash).unwrap());
    }

    #[test]
    fn test_each_hash_gets_its_own_salt() {
        let first = hash_password("gadkot").unwrap();
        let second = hash_password("gadkot").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("gadkot", &first).unwrap());
        assert!(verify_password("gadkot", &second).unwrap());
    }

    #[test]
    fn test_malformed_stored_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
