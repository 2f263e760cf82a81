mod site_url_dto;

pub use site_url_dto::*;
