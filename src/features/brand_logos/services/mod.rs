mod brand_logo_service;

pub use brand_logo_service::BrandLogoService;
