use axum::extract::{Path, Query, Request, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::errors::ApiErrorDetail;
use super::rate_limit::rate_limit;
use super::schemas::{LinksResponse, PageQuery, ToastHint};
use super::ServerState;
use crate::share::{build_share_link, build_share_links, Platform};

const STATIC_CACHE_CONTROL: &str = "public, max-age=86400";
const DYNAMIC_CACHE_CONTROL: &str = "no-cache, no-store, must-revalidate";

pub fn router(state: Arc<ServerState>) -> Router {
    let static_dir = state.static_dir.clone();

    Router::new()
        .route("/", get(handle_links))
        .route("/health", get(handle_health))
        .route("/api/links", get(handle_links))
        .route("/share/{platform}", get(handle_share))
        .nest_service("/static", ServeDir::new(&static_dir))
        .route_service("/robots.txt", ServeFile::new(static_dir.join("robots.txt")))
        .route_service(
            "/favicon.ico",
            ServeFile::new(static_dir.join("images/favicon.ico")),
        )
        .fallback(handle_not_found)
        .layer(middleware::from_fn(cache_control))
        .layer(middleware::from_fn_with_state(Arc::clone(&state), rate_limit))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.request_timeout,
        ))
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_health() -> &'static str {
    "OK"
}

async fn handle_links(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<PageQuery>,
) -> Json<LinksResponse> {
    let page = query.resolve(&state.site);
    let links = build_share_links(&page, &state.text, state.popup);
    Json(LinksResponse {
        url: page.url,
        title: page.title,
        links,
        toast: ToastHint::new(state.toast_duration_ms),
    })
}

async fn handle_share(
    State(state): State<Arc<ServerState>>,
    Path(platform): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Redirect, ApiErrorDetail> {
    let platform: Platform = platform
        .parse()
        .map_err(|_| ApiErrorDetail::unknown_platform(&platform))?;
    let page = query.resolve(&state.site);
    let link = build_share_link(platform, &page, &state.text, state.popup);

    info!(platform = %platform, page = %page.url, "Redirecting to share dialog");
    Ok(Redirect::to(&link.url))
}

async fn handle_not_found() -> Response {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/")]).into_response()
}

/// Long-lived caching only for assets actually served from `/static/`.
async fn cache_control(req: Request, next: Next) -> Response {
    let is_static = req.uri().path().starts_with("/static/");
    let mut response = next.run(req).await;
    let value = if is_static && response.status().is_success() {
        STATIC_CACHE_CONTROL
    } else {
        DYNAMIC_CACHE_CONTROL
    };
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static(value));
    response
}
