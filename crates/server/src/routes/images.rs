//! Image route handlers: upload, partial update, delete.
//!
//! Uploads arrive as multipart forms with one file field (`image`) and
//! text fields `name, price, section, category, clothingType`. Update and
//! delete carry the same addressing fields in the JSON body and query
//! string respectively; the catalog's resolution cascade decides which
//! list they hit.

use axum::extract::{Multipart, Path, Query, State};
use axum::{Json, body::Bytes};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use miola_core::{Image, SectionKey};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::upload;

/// Response for upload and update: the affected image record.
#[derive(Debug, Serialize)]
pub struct ImageResponse {
    pub success: bool,
    pub image: Image,
    pub message: &'static str,
}

/// Response for delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Body for PUT /api/update-image/{id}.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateImageRequest {
    pub name: Option<String>,
    pub price: Option<String>,
    pub section: Option<String>,
    pub category: Option<String>,
    pub clothing_type: Option<String>,
}

/// Query for DELETE /api/delete-image/{id}.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteImageQuery {
    pub section: Option<String>,
    pub category: Option<String>,
    pub clothing_type: Option<String>,
}

/// Collected multipart form fields for an upload.
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<(Option<String>, Bytes)>,
    name: Option<String>,
    price: Option<String>,
    section: Option<String>,
    category: Option<String>,
    clothing_type: Option<String>,
}

impl UploadForm {
    async fn collect(mut multipart: Multipart) -> Result<Self> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await? {
            let field_name = field.name().map(ToString::to_string);
            match field_name.as_deref() {
                Some("image") => {
                    let content_type = field.content_type().map(ToString::to_string);
                    if !upload::is_image_content_type(content_type.as_deref()) {
                        return Err(AppError::BadRequest(
                            "Only image files are allowed".to_string(),
                        ));
                    }
                    let original_name = field.file_name().map(ToString::to_string);
                    let bytes = field.bytes().await?;
                    form.file = Some((original_name, bytes));
                }
                Some("name") => form.name = Some(field.text().await?),
                Some("price") => form.price = Some(field.text().await?),
                Some("section") => form.section = Some(field.text().await?),
                Some("category") => form.category = Some(field.text().await?),
                Some("clothingType") => form.clothing_type = Some(field.text().await?),
                // Unknown fields are drained and ignored.
                _ => drop(field.bytes().await),
            }
        }
        Ok(form)
    }
}

/// POST /api/upload-image
///
/// Stores the file, creates the image record, appends it to the resolved
/// list (evicting past the cap), and persists the catalog.
///
/// # Errors
///
/// 400 when no file is attached or the part is not an image; 500 when
/// the file cannot be written.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ImageResponse>> {
    let form = UploadForm::collect(multipart).await?;

    let Some((original_name, bytes)) = form.file else {
        return Err(AppError::BadRequest("No file uploaded".to_string()));
    };

    let section = SectionKey::from_param(form.section.as_deref());
    let uploaded_at = Utc::now();
    let millis = uploaded_at.timestamp_millis();
    let filename = upload::storage_filename(section, original_name.as_deref(), millis);

    upload::store(&state.config().upload_dir, &filename, &bytes)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to store upload: {e}")))?;

    let image = Image {
        id: millis.to_string(),
        url: state.config().upload_url(&filename),
        filename,
        name: form
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Product {millis}")),
        price: form
            .price
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "$49.99".to_string()),
        uploaded_at,
    };

    let mut catalog = state.catalog().lock().await;
    let scope = catalog.append_image(
        section,
        form.category.as_deref(),
        form.clothing_type.as_deref(),
        image.clone(),
    );
    state.persist(&catalog).await;
    drop(catalog);

    tracing::info!(section = %section, ?scope, id = %image.id, "Image uploaded");
    Ok(Json(ImageResponse {
        success: true,
        image,
        message: "Image uploaded successfully",
    }))
}

/// PUT /api/update-image/{id}
///
/// Partial update of name/price; omitted or empty fields are untouched.
///
/// # Errors
///
/// 404 when the id is not in the resolved list or the section root list.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateImageRequest>,
) -> Result<Json<ImageResponse>> {
    let section = SectionKey::from_param(body.section.as_deref());

    let mut catalog = state.catalog().lock().await;
    let image = catalog.update_image(
        section,
        body.category.as_deref(),
        body.clothing_type.as_deref(),
        &id,
        body.name.as_deref(),
        body.price.as_deref(),
    )?;
    state.persist(&catalog).await;
    drop(catalog);

    tracing::info!(section = %section, id = %id, "Image updated");
    Ok(Json(ImageResponse {
        success: true,
        image,
        message: "Image updated successfully",
    }))
}

/// DELETE /api/delete-image/{id}
///
/// Removes the record and deletes the backing file (idempotent; a file
/// already gone is not an error).
///
/// # Errors
///
/// 404 when the id is not in the resolved list or the section root list.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DeleteImageQuery>,
) -> Result<Json<DeleteResponse>> {
    let section = SectionKey::from_param(query.section.as_deref());

    let mut catalog = state.catalog().lock().await;
    let image = catalog.remove_image(
        section,
        query.category.as_deref(),
        query.clothing_type.as_deref(),
        &id,
    )?;

    if let Err(e) = upload::delete(&state.config().upload_dir, &image.filename).await {
        tracing::warn!(filename = %image.filename, error = %e, "Failed to delete uploaded file");
    }

    state.persist(&catalog).await;
    drop(catalog);

    tracing::info!(section = %section, id = %id, "Image deleted");
    Ok(Json(DeleteResponse {
        success: true,
        message: "Image deleted successfully",
    }))
}
