use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{AdminDto, AuthResponseDto, LoginRequestDto};
use crate::features::auth::model::AdminUser;
use crate::features::auth::password::{hash_password_blocking, verify_password_blocking};
use crate::features::auth::services::token_service::TokenService;
use crate::shared::constants::ROLE_ADMIN;
use sqlx::PgPool;
use std::sync::Arc;

/// Service for admin sign-in and account bootstrap
pub struct AuthService {
    pool: PgPool,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(pool: PgPool, token_service: Arc<TokenService>) -> Self {
        Self {
            pool,
            token_service,
        }
    }

    /// Login with email and password
    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let email = dto.email.trim().to_lowercase();

        let admin = self.find_by_email(&email).await?;

        // Same message for unknown email and wrong password
        let verified = match &admin {
            Some(a) => verify_password_blocking(dto.password, a.password_hash.clone()).await?,
            None => false,
        };

        let admin = match admin {
            Some(a) if verified => a,
            _ => {
                tracing::warn!("Failed admin login attempt for {}", email);
                return Err(AppError::Unauthorized(
                    "Email atau kata sandi salah".to_string(),
                ));
            }
        };

        let token = self.token_service.issue(&admin)?;

        tracing::info!("Admin logged in: id={}, email={}", admin.id, admin.email);

        Ok(AuthResponseDto {
            access_token: token.access_token,
            token_type: "Bearer".to_string(),
            expires_in: token.expires_in,
            admin: AdminDto {
                id: admin.id,
                email: admin.email,
                name: admin.name,
                role: ROLE_ADMIN.to_string(),
            },
        })
    }

    /// Create the bootstrap admin when no account exists for the email
    pub async fn ensure_admin(&self, email: &str, password: &str) -> Result<()> {
        let email = email.trim().to_lowercase();

        if self.find_by_email(&email).await?.is_some() {
            tracing::debug!("Bootstrap admin {} already exists", email);
            return Ok(());
        }

        let password_hash = hash_password_blocking(password.to_string()).await?;
        let name = email.split('@').next().unwrap_or("admin").to_string();

        sqlx::query(
            r#"
            INSERT INTO admin_users (email, name, password_hash)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(&email)
        .bind(&name)
        .bind(&password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create bootstrap admin: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Bootstrap admin created: {}", email);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>> {
        sqlx::query_as::<_, AdminUser>(
            r#"
            SELECT id, email, name, password_hash, created_at, updated_at
            FROM admin_users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up admin by email: {:?}", e);
            AppError::Database(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AuthConfig;
    use std::time::Duration;

    fn service(pool: PgPool) -> AuthService {
        let config = AuthConfig {
            jwt_secret: "x".repeat(32),
            jwt_ttl: Duration::from_secs(3600),
            jwt_leeway: Duration::ZERO,
            admin_email: None,
            admin_password: None,
        };
        AuthService::new(pool, Arc::new(TokenService::new(&config)))
    }

    fn login(email: &str, password: &str) -> LoginRequestDto {
        LoginRequestDto {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_bootstrap_admin_can_log_in(pool: PgPool) {
        let svc = service(pool);
        svc.ensure_admin(" Admin@Temujanji.id ", "rahasia123")
            .await
            .unwrap();
        // Second call leaves the existing account alone
        svc.ensure_admin("admin@temujanji.id", "lain-lagi")
            .await
            .unwrap();

        let auth = svc
            .login(login("admin@temujanji.id", "rahasia123"))
            .await
            .unwrap();
        assert_eq!(auth.token_type, "Bearer");
        assert_eq!(auth.admin.name, "admin");

        let wrong = svc.login(login("admin@temujanji.id", "lain-lagi")).await;
        assert!(matches!(wrong, Err(AppError::Unauthorized(_))));
        let unknown = svc.login(login("siapa@temujanji.id", "rahasia123")).await;
        assert!(matches!(unknown, Err(AppError::Unauthorized(_))));
    }
}
