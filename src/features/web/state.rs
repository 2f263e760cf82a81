use std::sync::Arc;

use crate::features::blog::{CategoryService, PostService};
use crate::features::brand_logos::BrandLogoService;
use crate::features::faqs::FaqService;
use crate::features::site_pages::SitePageService;
use crate::features::site_urls::SiteUrlService;
use crate::features::testimonials::TestimonialService;
use crate::features::web::engine::PageRenderer;

/// Everything the page handlers read from
pub struct WebState {
    pub renderer: PageRenderer,
    pub posts: Arc<PostService>,
    pub categories: Arc<CategoryService>,
    pub urls: Arc<SiteUrlService>,
    pub faqs: Arc<FaqService>,
    pub testimonials: Arc<TestimonialService>,
    pub brand_logos: Arc<BrandLogoService>,
    pub pages: Arc<SitePageService>,
}
