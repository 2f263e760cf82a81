//! Customer brand logos shown in the landing page logo strip.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/brand-logos` | No | Active logos |
//! | GET/POST | `/api/admin/brand-logos` | Admin | List all / create |
//! | PUT/DELETE | `/api/admin/brand-logos/{id}` | Admin | Update / delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::BrandLogoService;
