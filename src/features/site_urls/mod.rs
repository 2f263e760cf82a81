//! Call-to-action URL configuration.
//!
//! Buttons on the public pages read their targets from `site_urls`. Rows are
//! grouped by `section`; each `(section, key)` overrides one entry of the
//! built-in map in [`defaults`]. Reads go through a last-known-good cache so
//! the pages always have a complete set of links.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/urls` | No | Resolved URL map |
//! | GET | `/api/admin/urls` | Admin | Stored rows |
//! | PUT | `/api/admin/urls` | Admin | Upsert a `(section, key)` row |
//! | DELETE | `/api/admin/urls/{id}` | Admin | Remove a row (falls back to default) |

pub mod defaults;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SiteUrlService;
