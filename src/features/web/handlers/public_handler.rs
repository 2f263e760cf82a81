use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use minijinja::context;
use serde::Deserialize;

use crate::core::error::AppError;
use crate::features::blog::dtos::PublicPostQuery;
use crate::features::site_pages::models::PageKey;
use crate::features::site_urls::dtos::UrlMap;
use crate::features::web::catalogue::{find_feature, FEATURES};
use crate::features::web::state::WebState;
use crate::shared::constants::{BLOG_PAGE_SIZE, LANDING_LATEST_POSTS};

/// Blog index query; unparsable values fall back instead of failing the page
#[derive(Debug, Default, Deserialize)]
pub struct BlogIndexQuery {
    pub page: Option<String>,
    pub category: Option<String>,
}

impl BlogIndexQuery {
    fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }

    fn category(&self) -> Option<String> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
    }
}

fn total_pages(total: i64, page_size: i64) -> i64 {
    if total <= 0 {
        1
    } else {
        (total + page_size - 1) / page_size
    }
}

pub async fn home(State(state): State<Arc<WebState>>) -> Response {
    let (urls, testimonials, brand_logos, latest_posts) = tokio::join!(
        state.urls.get_urls(),
        state.testimonials.list_active(),
        state.brand_logos.list_active(),
        state.posts.latest_published(LANDING_LATEST_POSTS),
    );

    state.renderer.page(
        StatusCode::OK,
        "home.html",
        context! {
            urls,
            testimonials,
            brand_logos,
            latest_posts,
            features => FEATURES,
        },
    )
}

pub async fn faq(State(state): State<Arc<WebState>>) -> Response {
    let (urls, faqs) = tokio::join!(state.urls.get_urls(), state.faqs.list_active());

    state
        .renderer
        .page(StatusCode::OK, "faq.html", context! { urls, faqs })
}

pub async fn feature(
    State(state): State<Arc<WebState>>,
    Path(slug): Path<String>,
) -> Response {
    let urls = state.urls.get_urls().await;

    match find_feature(&slug) {
        Some(feature) => state.renderer.page(
            StatusCode::OK,
            "feature.html",
            context! { urls, feature, features => FEATURES },
        ),
        None => not_found_page(&state, urls),
    }
}

pub async fn reseller(State(state): State<Arc<WebState>>) -> Response {
    let urls = state.urls.get_urls().await;
    state
        .renderer
        .page(StatusCode::OK, "reseller.html", context! { urls })
}

async fn site_page(state: &WebState, key: PageKey) -> Response {
    let (urls, page) = tokio::join!(state.urls.get_urls(), state.pages.get(key));

    state
        .renderer
        .page(StatusCode::OK, "page.html", context! { urls, page })
}

pub async fn about(State(state): State<Arc<WebState>>) -> Response {
    site_page(&state, PageKey::About).await
}

pub async fn contact(State(state): State<Arc<WebState>>) -> Response {
    site_page(&state, PageKey::Contact).await
}

pub async fn terms(State(state): State<Arc<WebState>>) -> Response {
    site_page(&state, PageKey::Terms).await
}

pub async fn privacy(State(state): State<Arc<WebState>>) -> Response {
    site_page(&state, PageKey::Privacy).await
}

pub async fn blog_index(
    State(state): State<Arc<WebState>>,
    Query(query): Query<BlogIndexQuery>,
) -> Response {
    let params = PublicPostQuery {
        page: query.page(),
        page_size: BLOG_PAGE_SIZE,
        category: query.category(),
    };

    let (urls, categories, listing) = tokio::join!(
        state.urls.get_urls(),
        state.categories.list_cached(),
        state.posts.list_published(&params),
    );

    let (posts, total, notice) = match listing {
        Ok((posts, total)) => (posts, total, None),
        Err(e) => {
            tracing::warn!("Failed to load blog index: {}", e);
            (
                Vec::new(),
                0,
                Some("Artikel belum dapat dimuat. Silakan coba beberapa saat lagi."),
            )
        }
    };

    state.renderer.page(
        StatusCode::OK,
        "blog_index.html",
        context! {
            urls,
            categories,
            posts,
            notice,
            page => params.page,
            total_pages => total_pages(total, BLOG_PAGE_SIZE),
            category => params.category,
        },
    )
}

pub async fn blog_post(
    State(state): State<Arc<WebState>>,
    Path(slug): Path<String>,
) -> Response {
    let (urls, post) = tokio::join!(
        state.urls.get_urls(),
        state.posts.get_published_by_slug(&slug),
    );

    match post {
        Ok(post) => {
            let meta_title = post
                .seo_title
                .clone()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| post.title.clone());
            let meta_description = post
                .meta_description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .or_else(|| post.excerpt.clone());

            state.renderer.page(
                StatusCode::OK,
                "blog_post.html",
                context! { urls, post, meta_title, meta_description },
            )
        }
        Err(AppError::NotFound(_)) => not_found_page(&state, urls),
        Err(e) => {
            tracing::error!("Failed to load blog post '{}': {}", slug, e);
            state.renderer.page(
                StatusCode::SERVICE_UNAVAILABLE,
                "status.html",
                context! {
                    urls,
                    title => "Artikel belum dapat dimuat",
                    message => "Silakan coba beberapa saat lagi.",
                },
            )
        }
    }
}

/// Router fallback for unknown paths
pub async fn not_found(State(state): State<Arc<WebState>>) -> Response {
    let urls = state.urls.get_urls().await;
    not_found_page(&state, urls)
}

fn not_found_page(state: &WebState, urls: UrlMap) -> Response {
    state.renderer.page(
        StatusCode::NOT_FOUND,
        "status.html",
        context! {
            urls,
            title => "Halaman tidak ditemukan",
            message => "Halaman yang Anda cari tidak ada atau sudah dipindahkan.",
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_query_is_lenient() {
        let query = BlogIndexQuery {
            page: Some("abc".to_string()),
            category: Some("   ".to_string()),
        };
        assert_eq!(query.page(), 1);
        assert_eq!(query.category(), None);

        let query = BlogIndexQuery {
            page: Some(" 3 ".to_string()),
            category: Some(" Produktivitas ".to_string()),
        };
        assert_eq!(query.page(), 3);
        assert_eq!(query.category().as_deref(), Some("Produktivitas"));

        let query = BlogIndexQuery {
            page: Some("-2".to_string()),
            category: None,
        };
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 9), 1);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
        assert_eq!(total_pages(27, 9), 3);
    }
}
