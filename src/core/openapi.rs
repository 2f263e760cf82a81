use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::blog::{dtos as blog_dtos, handlers as blog_handlers, models as blog_models};
use crate::features::brand_logos::{dtos as brand_logos_dtos, handlers as brand_logos_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::faqs::{dtos as faqs_dtos, handlers as faqs_handlers};
use crate::features::files::{dtos as files_dtos, handlers as files_handlers};
use crate::features::site_pages::{
    dtos as site_pages_dtos, handlers as site_pages_handlers, models as site_pages_models,
};
use crate::features::site_urls::{dtos as site_urls_dtos, handlers as site_urls_handlers};
use crate::features::testimonials::{
    dtos as testimonials_dtos, handlers as testimonials_handlers,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::login,
        auth::handlers::get_me,
        // Blog (public)
        blog_handlers::list_public_posts,
        blog_handlers::get_public_post,
        blog_handlers::list_public_categories,
        // Blog (admin)
        blog_handlers::create_post,
        blog_handlers::list_posts,
        blog_handlers::get_post,
        blog_handlers::update_post,
        blog_handlers::delete_post,
        blog_handlers::publish_post,
        blog_handlers::list_categories,
        blog_handlers::create_category,
        blog_handlers::update_category,
        blog_handlers::delete_category,
        // Site URLs
        site_urls_handlers::get_urls,
        site_urls_handlers::list_urls,
        site_urls_handlers::upsert_url,
        site_urls_handlers::delete_url,
        // FAQs
        faqs_handlers::list_public_faqs,
        faqs_handlers::list_faqs,
        faqs_handlers::create_faq,
        faqs_handlers::update_faq,
        faqs_handlers::delete_faq,
        // Testimonials
        testimonials_handlers::list_public_testimonials,
        testimonials_handlers::list_testimonials,
        testimonials_handlers::create_testimonial,
        testimonials_handlers::update_testimonial,
        testimonials_handlers::delete_testimonial,
        // Brand logos
        brand_logos_handlers::list_public_brand_logos,
        brand_logos_handlers::list_brand_logos,
        brand_logos_handlers::create_brand_logo,
        brand_logos_handlers::update_brand_logo,
        brand_logos_handlers::delete_brand_logo,
        // Site pages
        site_pages_handlers::get_page,
        site_pages_handlers::list_pages,
        site_pages_handlers::update_page,
        // Files
        files_handlers::upload_file,
        files_handlers::delete_file_by_url,
        // Dashboard
        dashboard_handlers::get_summary,
    ),
    components(
        schemas(
            Meta,
            // Auth
            auth::dtos::LoginRequestDto,
            auth::dtos::AuthResponseDto,
            auth::dtos::AdminDto,
            auth::model::AuthenticatedAdmin,
            ApiResponse<auth::dtos::AuthResponseDto>,
            ApiResponse<auth::dtos::AdminDto>,
            // Blog
            blog_models::PostStatus,
            blog_dtos::PostFormDto,
            blog_dtos::PostResponseDto,
            blog_dtos::PostSummaryDto,
            blog_dtos::CategoryFormDto,
            blog_dtos::CategoryResponseDto,
            ApiResponse<blog_dtos::PostResponseDto>,
            ApiResponse<Vec<blog_dtos::PostSummaryDto>>,
            ApiResponse<blog_dtos::CategoryResponseDto>,
            ApiResponse<Vec<blog_dtos::CategoryResponseDto>>,
            // Site URLs
            site_urls_dtos::LinkDto,
            site_urls_dtos::UpsertSiteUrlDto,
            site_urls_dtos::SiteUrlResponseDto,
            ApiResponse<site_urls_dtos::SiteUrlResponseDto>,
            ApiResponse<Vec<site_urls_dtos::SiteUrlResponseDto>>,
            // FAQs
            faqs_dtos::FaqFormDto,
            faqs_dtos::FaqResponseDto,
            ApiResponse<faqs_dtos::FaqResponseDto>,
            ApiResponse<Vec<faqs_dtos::FaqResponseDto>>,
            // Testimonials
            testimonials_dtos::TestimonialFormDto,
            testimonials_dtos::TestimonialResponseDto,
            ApiResponse<testimonials_dtos::TestimonialResponseDto>,
            ApiResponse<Vec<testimonials_dtos::TestimonialResponseDto>>,
            // Brand logos
            brand_logos_dtos::BrandLogoFormDto,
            brand_logos_dtos::BrandLogoResponseDto,
            ApiResponse<brand_logos_dtos::BrandLogoResponseDto>,
            ApiResponse<Vec<brand_logos_dtos::BrandLogoResponseDto>>,
            // Site pages
            site_pages_models::PageKey,
            site_pages_dtos::UpdateSitePageDto,
            site_pages_dtos::SitePageDto,
            ApiResponse<site_pages_dtos::SitePageDto>,
            ApiResponse<Vec<site_pages_dtos::SitePageDto>>,
            // Files
            files_dtos::UploadFileDto,
            files_dtos::FileResponseDto,
            files_dtos::DeleteFileByUrlDto,
            files_dtos::DeleteFileResponseDto,
            ApiResponse<files_dtos::FileResponseDto>,
            ApiResponse<files_dtos::DeleteFileResponseDto>,
            // Dashboard
            dashboard_dtos::PostCountsDto,
            dashboard_dtos::DashboardSummaryDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
        )
    ),
    tags(
        (name = "auth", description = "Admin sign-in"),
        (name = "blog", description = "Published blog posts and categories (public)"),
        (name = "admin-blog", description = "Blog post and category management"),
        (name = "site-urls", description = "Call-to-action and footer URLs"),
        (name = "faqs", description = "Frequently asked questions"),
        (name = "testimonials", description = "Customer testimonials"),
        (name = "brand-logos", description = "Customer brand logos"),
        (name = "site-pages", description = "About, contact, terms and privacy pages"),
        (name = "files", description = "Media uploads"),
        (name = "dashboard", description = "Admin dashboard counts"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Temujanji Web API",
        version = "0.1.0",
        description = "Content API for the Temujanji marketing site",
    )
)]
pub struct ApiDoc;

/// Registers the bearer JWT security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_admin_and_public_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/admin/auth/login",
            "/api/admin/posts",
            "/api/admin/posts/{id}/publish",
            "/api/blog/posts/{slug}",
            "/api/urls",
            "/api/pages/{key}",
            "/api/admin/files/upload",
            "/api/admin/dashboard",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
