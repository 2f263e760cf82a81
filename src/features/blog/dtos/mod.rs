mod category_dto;
mod post_dto;

pub use category_dto::*;
pub use post_dto::*;
