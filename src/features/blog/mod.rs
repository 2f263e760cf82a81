//! Blog content management.
//!
//! Posts move between `draft`, `published` and `scheduled`. A post is public
//! when it is published, or scheduled with a `published_at` that has passed.
//! Categories are a plain lookup list; posts store the category name as text.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/blog/posts` | No | Public posts, newest first |
//! | GET | `/api/blog/posts/{slug}` | No | Public post by slug |
//! | GET | `/api/blog/categories` | No | Category list |
//! | GET/POST | `/api/admin/posts` | Admin | List / create posts |
//! | GET/PUT/DELETE | `/api/admin/posts/{id}` | Admin | Read / update / delete a post |
//! | POST | `/api/admin/posts/{id}/publish` | Admin | Publish now |
//! | GET/POST | `/api/admin/blog-categories` | Admin | List / create categories |
//! | PUT/DELETE | `/api/admin/blog-categories/{id}` | Admin | Update / delete a category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod slug;

pub use services::{CategoryService, PostService};
