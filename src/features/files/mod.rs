//! Media uploads for cover images, avatars and brand logos.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/admin/files/upload` | Admin | Upload an image (multipart) |
//! | DELETE | `/api/admin/files` | Admin | Delete an uploaded image by URL |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::FileService;
