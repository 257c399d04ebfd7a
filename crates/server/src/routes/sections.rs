//! Section route handlers: read full documents, rename title/description.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use miola_core::{Section, SectionKey};

use crate::state::AppState;

/// Request to rename a section's display metadata.
#[derive(Debug, Deserialize)]
pub struct RenameSectionRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Response carrying the updated section document.
#[derive(Debug, Serialize)]
pub struct RenameSectionResponse {
    pub success: bool,
    pub data: Section,
}

async fn show(state: &AppState, key: SectionKey) -> Json<Section> {
    Json(state.catalog().lock().await.section(key).clone())
}

async fn rename(
    state: &AppState,
    key: SectionKey,
    body: RenameSectionRequest,
) -> Json<RenameSectionResponse> {
    let mut catalog = state.catalog().lock().await;
    let section = catalog
        .rename_section(key, body.title.as_deref(), body.description.as_deref())
        .clone();
    state.persist(&catalog).await;
    drop(catalog);

    tracing::info!(section = %key, title = %section.title, "Section renamed");
    Json(RenameSectionResponse {
        success: true,
        data: section,
    })
}

/// GET /api/main-section
pub async fn show_main(State(state): State<AppState>) -> Json<Section> {
    show(&state, SectionKey::Main).await
}

/// GET /api/women-section
pub async fn show_women(State(state): State<AppState>) -> Json<Section> {
    show(&state, SectionKey::Women).await
}

/// GET /api/men-section
pub async fn show_men(State(state): State<AppState>) -> Json<Section> {
    show(&state, SectionKey::Men).await
}

/// GET /api/kids-section
pub async fn show_kids(State(state): State<AppState>) -> Json<Section> {
    show(&state, SectionKey::Kids).await
}

/// PUT /api/women-section
pub async fn update_women(
    State(state): State<AppState>,
    Json(body): Json<RenameSectionRequest>,
) -> Json<RenameSectionResponse> {
    rename(&state, SectionKey::Women, body).await
}

/// PUT /api/men-section
pub async fn update_men(
    State(state): State<AppState>,
    Json(body): Json<RenameSectionRequest>,
) -> Json<RenameSectionResponse> {
    rename(&state, SectionKey::Men, body).await
}

/// PUT /api/kids-section
pub async fn update_kids(
    State(state): State<AppState>,
    Json(body): Json<RenameSectionRequest>,
) -> Json<RenameSectionResponse> {
    rename(&state, SectionKey::Kids, body).await
}
