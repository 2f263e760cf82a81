//! Argon2 password hashing for admin accounts.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::core::error::{AppError, Result};

/// Hash a password into a PHC string
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Check a password against a stored PHC string. Malformed hashes never verify.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("Stored password hash is malformed: {}", e);
            return false;
        }
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// `hash_password` on the blocking pool, off the async workers
pub async fn hash_password_blocking(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
}

/// `verify_password` on the blocking pool, off the async workers
pub async fn verify_password_blocking(password: String, hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("Password verification task failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("rahasia-sekali").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("rahasia-sekali", &hash));
        assert!(!verify_password("salah", &hash));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }

    #[tokio::test]
    async fn test_blocking_wrappers_match_sync_helpers() {
        let hash = hash_password_blocking("rahasia-sekali".to_string())
            .await
            .unwrap();
        assert!(verify_password_blocking("rahasia-sekali".to_string(), hash.clone())
            .await
            .unwrap());
        assert!(!verify_password_blocking("salah".to_string(), hash).await.unwrap());
        assert!(
            !verify_password_blocking("x".to_string(), "not-a-phc-string".to_string())
                .await
                .unwrap()
        );
    }
}
