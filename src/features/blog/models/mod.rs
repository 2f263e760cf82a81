mod category;
mod post;

pub use category::BlogCategory;
pub use post::{Post, PostStatus};
