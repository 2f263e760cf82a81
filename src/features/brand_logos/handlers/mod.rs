mod brand_logo_handler;

pub use brand_logo_handler::*;
