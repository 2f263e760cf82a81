mod category_service;
mod post_service;

pub use category_service::CategoryService;
pub use post_service::PostService;
