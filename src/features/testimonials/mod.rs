//! Customer testimonials shown on the landing page.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/testimonials` | No | Active testimonials |
//! | GET/POST | `/api/admin/testimonials` | Admin | List all / create |
//! | PUT/DELETE | `/api/admin/testimonials/{id}` | Admin | Update / delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::TestimonialService;
