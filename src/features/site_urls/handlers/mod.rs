mod site_url_handler;

pub use site_url_handler::*;
