use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::blog::dtos::{
    CategoryResponseDto, PostResponseDto, PostSummaryDto, PublicPostQuery,
};
use crate::features::blog::services::{CategoryService, PostService};
use crate::shared::types::{ApiResponse, Meta};

/// List public blog posts
#[utoipa::path(
    get,
    path = "/api/blog/posts",
    params(PublicPostQuery),
    responses(
        (status = 200, description = "Published posts, newest first", body = ApiResponse<Vec<PostSummaryDto>>),
    ),
    tag = "blog"
)]
pub async fn list_public_posts(
    State(service): State<Arc<PostService>>,
    Query(query): Query<PublicPostQuery>,
) -> Result<Json<ApiResponse<Vec<PostSummaryDto>>>> {
    let (posts, total) = service.list_published(&query).await?;
    Ok(Json(ApiResponse::success(
        Some(posts),
        None,
        Some(Meta { total }),
    )))
}

/// Get a public blog post by slug
#[utoipa::path(
    get,
    path = "/api/blog/posts/{slug}",
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    responses(
        (status = 200, description = "Post found", body = ApiResponse<PostResponseDto>),
        (status = 404, description = "Post not found or not yet published")
    ),
    tag = "blog"
)]
pub async fn get_public_post(
    State(service): State<Arc<PostService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<PostResponseDto>>> {
    let post = service.get_published_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(post), None, None)))
}

/// List blog categories
#[utoipa::path(
    get,
    path = "/api/blog/categories",
    responses(
        (status = 200, description = "Categories ordered for display", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "blog"
)]
pub async fn list_public_categories(
    State(service): State<Arc<CategoryService>>,
) -> Json<ApiResponse<Vec<CategoryResponseDto>>> {
    let categories = service.list_cached().await;
    Json(ApiResponse::success(Some(categories), None, None))
}
