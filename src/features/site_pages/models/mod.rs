mod site_page;

pub use site_page::{PageKey, SitePage};
