mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::auth::routes as auth_routes;
use crate::features::auth::services::{AuthService, TokenService};
use crate::features::auth::JwtValidator;
use crate::features::blog::{routes as blog_routes, CategoryService, PostService};
use crate::features::brand_logos::{routes as brand_logos_routes, BrandLogoService};
use crate::features::dashboard::{routes as dashboard_routes, DashboardService};
use crate::features::faqs::{routes as faqs_routes, FaqService};
use crate::features::files::{routes as files_routes, FileService};
use crate::features::site_pages::{routes as site_pages_routes, SitePageService};
use crate::features::site_urls::{routes as site_urls_routes, SiteUrlService};
use crate::features::testimonials::{routes as testimonials_routes, TestimonialService};
use crate::features::web::{routes as web_routes, PageRenderer, WebState};
use crate::modules::storage::StorageClient;
use axum::{extract::State, http::StatusCode, middleware::from_fn_with_state, Router};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

/// Liveness plus a database round trip
async fn health_check(State(pool): State<PgPool>) -> StatusCode {
    match database::ping(&pool).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "Starting {}: tokio_worker_threads={}, pid={}",
        config.site.name,
        worker_threads,
        std::process::id()
    );

    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Auth
    let token_service = Arc::new(TokenService::new(&config.auth));
    let auth_service = Arc::new(AuthService::new(pool.clone(), Arc::clone(&token_service)));
    let jwt_validator = Arc::new(JwtValidator::new(
        &config.auth.jwt_secret,
        config.auth.jwt_leeway,
    ));

    if let Some((email, password)) = config.auth.bootstrap_admin() {
        auth_service
            .ensure_admin(email, password)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bootstrap admin: {}", e))?;
    } else {
        tracing::info!("ADMIN_EMAIL/ADMIN_PASSWORD not set, skipping admin bootstrap");
    }

    // Content services share one cache TTL
    let ttl = config.site.content_cache_ttl;
    let post_service = Arc::new(PostService::new(pool.clone(), ttl));
    let category_service = Arc::new(CategoryService::new(pool.clone(), ttl));
    let site_url_service = Arc::new(SiteUrlService::new(pool.clone(), ttl));
    let faq_service = Arc::new(FaqService::new(pool.clone(), ttl));
    let testimonial_service = Arc::new(TestimonialService::new(pool.clone(), ttl));
    let brand_logo_service = Arc::new(BrandLogoService::new(pool.clone(), ttl));
    let site_page_service = Arc::new(SitePageService::new(pool.clone(), ttl));
    tracing::info!("Content services initialized (cache ttl {:?})", ttl);

    // Media storage; an unreachable store only disables uploads
    let storage = Arc::new(
        StorageClient::new(&config.storage)
            .map_err(|e| anyhow::anyhow!("Failed to initialize storage client: {}", e))?,
    );
    storage.ensure_bucket().await;
    let file_service = Arc::new(FileService::new(pool.clone(), Arc::clone(&storage)));

    let dashboard_service = Arc::new(DashboardService::new(pool.clone()));

    let renderer = PageRenderer::new(&config.site)
        .map_err(|e| anyhow::anyhow!("Failed to load templates: {}", e))?;
    let web_state = Arc::new(WebState {
        renderer,
        posts: Arc::clone(&post_service),
        categories: Arc::clone(&category_service),
        urls: Arc::clone(&site_url_service),
        faqs: Arc::clone(&faq_service),
        testimonials: Arc::clone(&testimonial_service),
        brand_logos: Arc::clone(&brand_logo_service),
        pages: Arc::clone(&site_page_service),
    });

    // Swagger
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn_with_state(
                Arc::new(credentials),
                middleware::basic_auth_middleware,
            ))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Admin API (requires a valid admin token)
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes())
        .merge(blog_routes::admin_routes(
            Arc::clone(&post_service),
            Arc::clone(&category_service),
        ))
        .merge(site_urls_routes::admin_routes(Arc::clone(&site_url_service)))
        .merge(faqs_routes::admin_routes(Arc::clone(&faq_service)))
        .merge(testimonials_routes::admin_routes(Arc::clone(
            &testimonial_service,
        )))
        .merge(brand_logos_routes::admin_routes(Arc::clone(
            &brand_logo_service,
        )))
        .merge(site_pages_routes::admin_routes(Arc::clone(&site_page_service)))
        .merge(files_routes::admin_routes(file_service))
        .merge(dashboard_routes::admin_routes(dashboard_service))
        .route_layer(from_fn_with_state(
            Arc::clone(&jwt_validator),
            middleware::auth_middleware,
        ));

    // Public JSON API (no auth required)
    let public_routes = Router::new()
        .merge(auth_routes::public_routes(auth_service))
        .merge(blog_routes::public_routes(
            Arc::clone(&post_service),
            Arc::clone(&category_service),
        ))
        .merge(site_urls_routes::public_routes(site_url_service))
        .merge(faqs_routes::public_routes(faq_service))
        .merge(testimonials_routes::public_routes(testimonial_service))
        .merge(brand_logos_routes::public_routes(brand_logo_service))
        .merge(site_pages_routes::public_routes(site_page_service));

    let health_route = Router::new()
        .route("/health", axum::routing::get(health_check))
        .with_state(pool.clone());

    let app = Router::new()
        .merge(swagger)
        .merge(protected_routes)
        .merge(public_routes)
        .merge(health_route)
        // HTML pages carry the 404 fallback, so they go last
        .merge(web_routes::routes(web_state))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Admin panel at http://{}/admin/login", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
