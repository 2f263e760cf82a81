use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::blog::dtos::{AdminPostQuery, PostFormDto, PostResponseDto, PostSummaryDto};
use crate::features::blog::services::PostService;
use crate::shared::types::{ApiResponse, Meta};

/// Create a blog post
#[utoipa::path(
    post,
    path = "/api/admin/posts",
    request_body = PostFormDto,
    responses(
        (status = 201, description = "Post created", body = ApiResponse<PostResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Slug already used")
    ),
    tag = "admin-blog",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_post(
    RequireAdmin(admin): RequireAdmin,
    State(service): State<Arc<PostService>>,
    AppJson(dto): AppJson<PostFormDto>,
) -> Result<(StatusCode, Json<ApiResponse<PostResponseDto>>)> {
    let post = service.create(dto).await?;
    tracing::debug!("Post {} created by {}", post.id, admin.email);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(post),
            Some("Post berhasil dibuat".to_string()),
            None,
        )),
    ))
}

/// List blog posts (all statuses)
#[utoipa::path(
    get,
    path = "/api/admin/posts",
    params(AdminPostQuery),
    responses(
        (status = 200, description = "Posts", body = ApiResponse<Vec<PostSummaryDto>>),
    ),
    tag = "admin-blog",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_posts(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<PostService>>,
    Query(query): Query<AdminPostQuery>,
) -> Result<Json<ApiResponse<Vec<PostSummaryDto>>>> {
    let (posts, total) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(
        Some(posts),
        None,
        Some(Meta { total }),
    )))
}

/// Get a blog post by ID
#[utoipa::path(
    get,
    path = "/api/admin/posts/{id}",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post", body = ApiResponse<PostResponseDto>),
        (status = 404, description = "Post not found")
    ),
    tag = "admin-blog",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_post(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<PostService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PostResponseDto>>> {
    let post = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(post), None, None)))
}

/// Replace a blog post
#[utoipa::path(
    put,
    path = "/api/admin/posts/{id}",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    request_body = PostFormDto,
    responses(
        (status = 200, description = "Post updated", body = ApiResponse<PostResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Post not found"),
        (status = 409, description = "Slug already used")
    ),
    tag = "admin-blog",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_post(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<PostService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<PostFormDto>,
) -> Result<Json<ApiResponse<PostResponseDto>>> {
    let post = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(post),
        Some("Post berhasil diperbarui".to_string()),
        None,
    )))
}

/// Delete a blog post
#[utoipa::path(
    delete,
    path = "/api/admin/posts/{id}",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post deleted"),
        (status = 404, description = "Post not found")
    ),
    tag = "admin-blog",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_post(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<PostService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Post berhasil dihapus".to_string()),
        None,
    )))
}

/// Publish a blog post now
#[utoipa::path(
    post,
    path = "/api/admin/posts/{id}/publish",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post published", body = ApiResponse<PostResponseDto>),
        (status = 404, description = "Post not found")
    ),
    tag = "admin-blog",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn publish_post(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<PostService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PostResponseDto>>> {
    let post = service.publish(id).await?;
    Ok(Json(ApiResponse::success(
        Some(post),
        Some("Post berhasil diterbitkan".to_string()),
        None,
    )))
}
