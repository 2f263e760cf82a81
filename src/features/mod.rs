pub mod auth;
pub mod blog;
pub mod brand_logos;
pub mod dashboard;
pub mod faqs;
pub mod files;
pub mod site_pages;
pub mod site_urls;
pub mod testimonials;
pub mod web;
