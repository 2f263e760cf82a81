use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::auth::model::AuthenticatedAdmin;

/// Request DTO for admin login
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response DTO for a successful login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    /// HS256 access token
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Token expiry time in seconds
    pub expires_in: i64,
    pub admin: AdminDto,
}

/// Admin info included in auth responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminDto {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<AuthenticatedAdmin> for AdminDto {
    fn from(admin: AuthenticatedAdmin) -> Self {
        Self {
            id: admin.id,
            email: admin.email,
            name: admin.name,
            role: admin.role,
        }
    }
}
