//! HTTP surface: showcase pages, submission form and JSON endpoints

pub mod data_routes;
pub mod error;
mod intake;
pub mod page_routes;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::catalog::Catalog;
use crate::config::{ServerConfig, DEFAULT_MAX_UPLOAD_MB};
use crate::ui::pages::{SHOWCASE_PATH, SUBMIT_PATH};

pub use error::AppError;

/// Shared application state. The catalog is read-only; per-viewer state
/// travels with each request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Router options taken from `ServerConfig`
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub static_dir: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            static_dir: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
        }
    }
}

impl From<&ServerConfig> for RouterOptions {
    fn from(config: &ServerConfig) -> Self {
        Self {
            static_dir: config.static_dir.clone(),
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}

/// Build the full router with all routes and middleware
pub fn create_router(state: AppState, options: RouterOptions) -> Router {
    let mut router = Router::new()
        .route("/", get(page_routes::index))
        .route(SHOWCASE_PATH, get(page_routes::showcase))
        .route(
            SUBMIT_PATH,
            post(page_routes::submit).layer(DefaultBodyLimit::max(options.max_upload_bytes)),
        )
        // JSON API
        .route("/api/health", get(data_routes::health))
        .route("/api/projects", get(data_routes::list_projects))
        .route("/api/stats", get(data_routes::stats))
        .route("/api/awards", get(data_routes::awards))
        .route("/api/vocabulary", get(data_routes::vocabulary))
        .route("/api/submissions", post(data_routes::check_submission))
        .with_state(state);

    if let Some(dir) = options.static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router.layer(
        ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        ),
    )
}
