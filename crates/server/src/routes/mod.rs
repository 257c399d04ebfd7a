//! HTTP route handlers for the catalog backend.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                        - Service banner with endpoint map
//! GET    /health                  - Health check
//!
//! # Sections
//! GET    /api/main-section        - Full main section document
//! GET    /api/women-section       - Full women section document
//! GET    /api/men-section         - Full men section document
//! GET    /api/kids-section        - Full kids section document
//! PUT    /api/women-section       - Rename title/description
//! PUT    /api/men-section         - Rename title/description
//! PUT    /api/kids-section        - Rename title/description
//!
//! # Images
//! POST   /api/upload-image        - Multipart upload (file field "image")
//! PUT    /api/update-image/{id}   - Partial name/price update
//! DELETE /api/delete-image/{id}   - Delete image and backing file
//!
//! # Static
//! GET    /uploads/{filename}      - Uploaded files
//! ```

pub mod images;
pub mod sections;

use axum::extract::DefaultBodyLimit;
use axum::{
    Json, Router,
    routing::{delete, get, post, put},
};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::upload::MAX_UPLOAD_BYTES;

/// Create the API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api/main-section", get(sections::show_main))
        .route(
            "/api/women-section",
            get(sections::show_women).put(sections::update_women),
        )
        .route(
            "/api/men-section",
            get(sections::show_men).put(sections::update_men),
        )
        .route(
            "/api/kids-section",
            get(sections::show_kids).put(sections::update_kids),
        )
        .route(
            "/api/upload-image",
            post(images::upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/update-image/{id}", put(images::update))
        .route("/api/delete-image/{id}", delete(images::remove))
}

/// Build the full application router: API routes, health check, static
/// uploads, permissive CORS, and request tracing.
pub fn app(state: AppState) -> Router {
    let upload_dir = state.config().upload_dir.clone();
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Service banner with the endpoint map.
async fn index() -> Json<Value> {
    Json(json!({
        "message": "Miola Backend Server is running!",
        "endpoints": {
            "womenSection": "/api/women-section",
            "menSection": "/api/men-section",
            "kidsSection": "/api/kids-section",
            "uploadImage": "/api/upload-image",
            "deleteImage": "/api/delete-image/:id",
            "updateSection": "/api/women-section",
            "updateImage": "/api/update-image/:id"
        }
    }))
}
