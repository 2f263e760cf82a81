mod site_url_service;

pub use site_url_service::SiteUrlService;
