//! Editable static pages: about, contact, terms and privacy.
//!
//! One row per [`models::PageKey`]. Pages without a row, or any page while
//! the database is unreachable, are served from built-in text.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/pages/{key}` | No | Page content |
//! | GET | `/api/admin/pages` | Admin | All four pages |
//! | PUT | `/api/admin/pages/{key}` | Admin | Replace a page |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SitePageService;
