mod brand_logo;

pub use brand_logo::BrandLogo;
