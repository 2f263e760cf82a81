mod site_page_service;

pub use site_page_service::SitePageService;
