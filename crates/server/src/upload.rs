//! Uploaded file storage: naming, writing, and deletion.
//!
//! Files are stored flat under the configured upload directory as
//! `{section}-{millis}-{random}{.ext}` and served back under `/uploads/`.

use std::path::Path;

use rand::Rng;

use miola_core::SectionKey;

/// Upload size limit, 5 MB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Whether a multipart content type is an acceptable image.
#[must_use]
pub fn is_image_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.starts_with("image/"))
}

/// Build the storage filename for an upload.
///
/// `{section}-{millis}-{random}{.ext}`, where the extension is carried
/// over from the client-supplied filename when it has one.
#[must_use]
pub fn storage_filename(section: SectionKey, original_name: Option<&str>, millis: i64) -> String {
    let suffix: u32 = rand::rng().random_range(0..1_000_000_000);
    let ext = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();
    format!("{section}-{millis}-{suffix}{ext}")
}

/// Write an uploaded file under the upload directory.
///
/// # Errors
///
/// Returns `std::io::Error` if the directory cannot be created or the
/// file cannot be written.
pub async fn store(dir: &Path, filename: &str, bytes: &[u8]) -> std::io::Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(dir.join(filename), bytes).await
}

/// Delete a stored file. Idempotent: a missing file is not an error.
///
/// Only the final path component of `filename` is used, so a stored
/// record can never point the deletion outside the upload directory.
///
/// # Errors
///
/// Returns `std::io::Error` for filesystem failures other than the file
/// already being gone.
pub async fn delete(dir: &Path, filename: &str) -> std::io::Result<()> {
    let Some(name) = Path::new(filename).file_name() else {
        return Ok(());
    };
    match tokio::fs::remove_file(dir.join(name)).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("miola-upload-{}-{}", name, rand::random::<u64>()))
    }

    #[test]
    fn test_is_image_content_type() {
        assert!(is_image_content_type(Some("image/png")));
        assert!(is_image_content_type(Some("image/jpeg")));
        assert!(!is_image_content_type(Some("application/pdf")));
        assert!(!is_image_content_type(None));
    }

    #[test]
    fn test_storage_filename_shape() {
        let name = storage_filename(SectionKey::Women, Some("photo.JPG"), 1_700_000_000_000);
        assert!(name.starts_with("women-1700000000000-"));
        assert!(name.ends_with(".JPG"));
    }

    #[test]
    fn test_storage_filename_without_extension() {
        let name = storage_filename(SectionKey::Main, Some("photo"), 42);
        assert!(name.starts_with("main-42-"));
        assert!(!name.contains('.'));

        let name = storage_filename(SectionKey::Kids, None, 42);
        assert!(name.starts_with("kids-42-"));
    }

    #[tokio::test]
    async fn test_store_then_delete() {
        let dir = scratch_dir("store");
        store(&dir, "women-1-2.jpg", b"fake image bytes")
            .await
            .unwrap();
        assert!(dir.join("women-1-2.jpg").exists());

        delete(&dir, "women-1-2.jpg").await.unwrap();
        assert!(!dir.join("women-1-2.jpg").exists());

        // Idempotent: deleting again is fine.
        delete(&dir, "women-1-2.jpg").await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_strips_path_components() {
        let dir = scratch_dir("traversal");
        store(&dir, "kids-1-2.png", b"x").await.unwrap();

        delete(&dir, "../traversal/kids-1-2.png").await.unwrap();
        assert!(!dir.join("kids-1-2.png").exists());
    }
}
