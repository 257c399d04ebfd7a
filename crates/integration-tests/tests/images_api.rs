//! Integration tests for the image catalog API.
//!
//! These tests require a running server (cargo run -p miola-server) and
//! mutate its catalog. Run with: cargo test -p miola-integration-tests -- --ignored

#![allow(clippy::unwrap_used)]

use reqwest::{Client, StatusCode, multipart};
use serde_json::{Value, json};

use miola_integration_tests::base_url;

fn image_part() -> multipart::Part {
    multipart::Part::bytes(vec![0xFF, 0xD8, 0xFF, 0xE0])
        .file_name("integration.jpg")
        .mime_str("image/jpeg")
        .unwrap()
}

async fn upload(client: &Client, section: &str, category: &str) -> Value {
    let form = multipart::Form::new()
        .text("name", "Integration Test Product")
        .text("price", "$1.00")
        .text("section", section.to_string())
        .text("category", category.to_string())
        .part("image", image_part());

    let resp = client
        .post(format!("{}/api/upload-image", base_url()))
        .multipart(form)
        .send()
        .await
        .expect("Failed to upload image");
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.unwrap()
}

async fn delete(client: &Client, id: &str, section: &str, category: &str) {
    let _ = client
        .delete(format!(
            "{}/api/delete-image/{id}?section={section}&category={category}",
            base_url()
        ))
        .send()
        .await;
}

#[tokio::test]
#[ignore = "Requires running miola server"]
async fn test_sections_are_served() {
    let client = Client::new();

    for section in ["main", "women", "men", "kids"] {
        let resp = client
            .get(format!("{}/api/{section}-section", base_url()))
            .send()
            .await
            .expect("Failed to get section");
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = resp.json().await.unwrap();
        assert!(body.get("title").is_some());
        assert!(body.get("categories").is_some());
    }
}

#[tokio::test]
#[ignore = "Requires running miola server"]
async fn test_upload_update_delete_cycle() {
    let client = Client::new();

    let uploaded = upload(&client, "women", "jeans").await;
    assert_eq!(uploaded["success"], true);
    let id = uploaded["image"]["id"].as_str().unwrap().to_string();

    // Uploaded file is served back under /uploads.
    let url = uploaded["image"]["url"].as_str().unwrap();
    let resp = client.get(url).send().await.expect("Failed to fetch file");
    assert_eq!(resp.status(), StatusCode::OK);

    // Partial update.
    let resp = client
        .put(format!("{}/api/update-image/{id}", base_url()))
        .json(&json!({"name": "Renamed", "section": "women", "category": "jeans"}))
        .send()
        .await
        .expect("Failed to update image");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["image"]["name"], "Renamed");
    assert_eq!(body["image"]["price"], "$1.00");

    // Delete, then the id is gone.
    delete(&client, &id, "women", "jeans").await;
    let resp = client
        .put(format!("{}/api/update-image/{id}", base_url()))
        .json(&json!({"name": "x", "section": "women", "category": "jeans"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running miola server"]
async fn test_upload_without_file_is_rejected() {
    let client = Client::new();
    let form = multipart::Form::new().text("name", "No File");

    let resp = client
        .post(format!("{}/api/upload-image", base_url()))
        .multipart(form)
        .send()
        .await
        .expect("Failed to post upload");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "No file uploaded");
}
