//! Admin authentication.
//!
//! Admins sign in with email and password (argon2 hashes in `admin_users`) and
//! receive an HS256 bearer token. Every `/api/admin/*` route except login sits
//! behind `auth_middleware`, which validates the token and stores the
//! [`model::AuthenticatedAdmin`] in the request extensions.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/admin/auth/login` | No | Exchange credentials for a token |
//! | GET | `/api/admin/auth/me` | Yes | Current admin |

mod validator;

pub mod dtos;
pub mod guards;
pub mod handlers;
pub mod model;
pub mod password;
pub mod routes;
pub mod services;

pub use validator::JwtValidator;
