mod site_page_dto;

pub use site_page_dto::*;
