mod brand_logo_dto;

pub use brand_logo_dto::*;
