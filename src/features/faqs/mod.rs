//! Frequently asked questions shown on `/faq`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/faqs` | No | Active FAQs in display order |
//! | GET/POST | `/api/admin/faqs` | Admin | List all / create |
//! | PUT/DELETE | `/api/admin/faqs/{id}` | Admin | Update / delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::FaqService;
