pub mod category_handler;
pub mod post_handler;
pub mod public_handler;

pub use category_handler::*;
pub use post_handler::*;
pub use public_handler::*;
