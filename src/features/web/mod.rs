//! Server-rendered pages: the public marketing site and the admin shell.
//!
//! Public pages read through the same services as the JSON API, so they
//! inherit the cached and built-in fallbacks and never fail on a database
//! outage. The admin shell is static HTML that drives `/api/admin/*`.

pub mod admin_sections;
pub mod catalogue;
pub mod engine;
pub mod handlers;
pub mod routes;
pub mod state;

pub use engine::PageRenderer;
pub use state::WebState;
