mod faq_dto;

pub use faq_dto::*;
