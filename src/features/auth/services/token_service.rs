use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AdminUser, Claims};
use crate::shared::constants::ROLE_ADMIN;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

/// An issued access token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: i64,
}

/// Issues HS256 access tokens for admins
pub struct TokenService {
    encoding_key: EncodingKey,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_secs: config.jwt_ttl.as_secs() as i64,
        }
    }

    pub fn issue(&self, admin: &AdminUser) -> Result<IssuedToken> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: admin.id.to_string(),
            email: admin.email.clone(),
            name: admin.name.clone(),
            role: ROLE_ADMIN.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

        tracing::debug!("Issued access token for admin {}", admin.id);

        Ok(IssuedToken {
            access_token,
            expires_in: self.ttl_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::JwtValidator;
    use std::time::Duration;
    use uuid::Uuid;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn config(ttl: Duration) -> AuthConfig {
        AuthConfig {
            jwt_secret: SECRET.to_string(),
            jwt_ttl: ttl,
            jwt_leeway: Duration::ZERO,
            admin_email: None,
            admin_password: None,
        }
    }

    fn admin() -> AdminUser {
        AdminUser {
            id: Uuid::new_v4(),
            email: "editor@temujanji.test".to_string(),
            name: "Editor".to_string(),
            password_hash: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_issued_token_validates() {
        let admin = admin();
        let token = TokenService::new(&config(Duration::from_secs(3600)))
            .issue(&admin)
            .unwrap();
        assert_eq!(token.expires_in, 3600);

        let validator = JwtValidator::new(SECRET, Duration::ZERO);
        let authenticated = validator.validate_token(&token.access_token).unwrap();
        assert_eq!(authenticated.id, admin.id);
        assert_eq!(authenticated.email, admin.email);
        assert!(authenticated.is_admin());
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = TokenService::new(&config(Duration::from_secs(3600)))
            .issue(&admin())
            .unwrap();

        let validator = JwtValidator::new("another-secret-another-secret-xx", Duration::ZERO);
        let result = validator.validate_token(&token.access_token);
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = TokenService {
            encoding_key: EncodingKey::from_secret(SECRET.as_bytes()),
            ttl_secs: -120,
        };
        let token = service.issue(&admin()).unwrap();

        let validator = JwtValidator::new(SECRET, Duration::ZERO);
        assert!(validator.validate_token(&token.access_token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let validator = JwtValidator::new(SECRET, Duration::ZERO);
        assert!(validator.validate_token("not.a.token").is_err());
    }
}
