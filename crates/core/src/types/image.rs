//! Uploaded product image record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uploaded product photo with display metadata.
///
/// Everything except `name` and `price` is fixed at upload time. The `id`
/// is the upload timestamp in milliseconds rendered as a string, matching
/// what the frontend already stores; collisions are possible under rapid
/// concurrent uploads and accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Unique id, derived from the creation timestamp in milliseconds.
    pub id: String,
    /// Stored filename under the uploads directory.
    pub filename: String,
    /// Absolute URL the file is served from.
    pub url: String,
    /// Display name.
    pub name: String,
    /// Display price, free-form (e.g. "$49.99").
    pub price: String,
    /// Upload timestamp.
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_image_serializes_camel_case_timestamp() {
        let image = Image {
            id: "1700000000000".to_string(),
            filename: "women-1700000000000-42.jpg".to_string(),
            url: "http://localhost:5000/uploads/women-1700000000000-42.jpg".to_string(),
            name: "Denim Jacket".to_string(),
            price: "$49.99".to_string(),
            uploaded_at: Utc::now(),
        };

        let json = serde_json::to_value(&image).unwrap();
        assert!(json.get("uploadedAt").is_some());
        assert!(json.get("uploaded_at").is_none());
        assert_eq!(json["id"], "1700000000000");
    }
}
