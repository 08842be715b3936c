use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::page::{HotelView, PageContext};
use crate::render::Region;
use crate::source::Origin;

/// Shared, read-only page state. Fragments are rendered before the server
/// starts; requests only pick a hotel view and compose.
#[derive(Clone)]
pub struct AppState {
    context: Arc<PageContext>,
    template: Arc<str>,
}

impl AppState {
    pub fn new(context: PageContext, template: impl Into<Arc<str>>) -> Self {
        Self {
            context: Arc::new(context),
            template: template.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    pub view: Option<HotelView>,
}

#[derive(Debug, Serialize)]
pub struct SectionCounts {
    pub hotels: usize,
    pub days: usize,
    pub activities: usize,
    pub attractions: usize,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub origin: Origin,
    pub resolved_at: DateTime<Utc>,
    pub default_view: HotelView,
    pub counts: SectionCounts,
}

pub fn router(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .route("/healthz", get(healthz))
        .route("/api/status", get(get_status))
        .route("/api/fragments/{region}", get(get_fragment))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(cors)
}

pub async fn run(state: AppState, static_dir: &str, port: u16) -> Result<()> {
    let app = router(state, static_dir);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", port);
    axum::serve(listener, app)
        .await
        .context("Web server stopped unexpectedly")?;
    Ok(())
}

async fn index(State(state): State<AppState>, Query(query): Query<ViewQuery>) -> Html<String> {
    let view = query.view.unwrap_or(state.context.hotel_view());
    Html(state.context.page().compose(&state.template, view))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let resolution = state.context.resolution();
    let dataset = &resolution.dataset;
    Json(StatusResponse {
        origin: resolution.origin.clone(),
        resolved_at: resolution.resolved_at,
        default_view: state.context.hotel_view(),
        counts: SectionCounts {
            hotels: dataset.hotels.len(),
            days: dataset.itinerary.len(),
            activities: dataset.activity_count(),
            attractions: dataset.attractions.len(),
        },
    })
}

async fn get_fragment(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let region: Region = region.parse().map_err(|_| StatusCode::NOT_FOUND)?;
    Ok(Html(state.context.page().fragment(region).to_string()))
}
