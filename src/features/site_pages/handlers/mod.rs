mod site_page_handler;

pub use site_page_handler::*;
