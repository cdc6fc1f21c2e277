//! # HTTP API Tests
//!
//! Drive the router in-process with `tower::ServiceExt::oneshot`.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::Router;
use boleto::server::{AppState, ServerConfig, router};
use boleto::symbol::SymbolConfig;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

const ITAU: &str = "34191090088737948710800106511017679120000010651";

fn app() -> Router {
    router(Arc::new(AppState::new(ServerConfig {
        listen_addr: "127.0.0.1:0".to_string(),
        symbol: SymbolConfig::COMPACT,
    })))
}

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_show_boleto() {
    let (status, body) = get(&format!("/api/boleto/{}", ITAU)).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["bank"], "Itaú");
    assert_eq!(json["barcode"], "34196791200000106511090087379487100010651101");
    assert_eq!(json["amount"], "106.51");
    assert_eq!(json["due_date"], "2019-06-06");
}

#[tokio::test]
async fn test_show_masked_number() {
    let (status, _) = get("/api/boleto/34191.09008%2087379.487108%2000106.511017%206%2079120000010651").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_show_invalid_boleto() {
    let (status, body) = get("/api/boleto/12345").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("47"));
}

#[tokio::test]
async fn test_barcode_png() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri(format!("/api/boleto/{}/barcode.png", ITAU))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..4], &[0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn test_barcode_png_invalid_boleto() {
    let mut number = ITAU.to_string();
    number.replace_range(32..33, "0");

    let (status, body) = get(&format!("/api/boleto/{}/barcode.png", number)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("checksum"));
}

#[tokio::test]
async fn test_list_banks() {
    let (status, body) = get("/api/banks").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    let banks = json.as_array().unwrap();
    assert!(banks.iter().any(|b| b["code"] == "341" && b["name"] == "Itaú"));
}

#[tokio::test]
async fn test_validate_batch() {
    let payload = serde_json::json!({ "numbers": [ITAU, "0".repeat(47)] });
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/boleto/validate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    let results = json.as_array().unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["valid"], true);
    assert_eq!(results[0]["boleto"]["bank"], "Itaú");
    assert_eq!(results[1]["valid"], false);
    assert!(results[1].get("boleto").is_none());
    assert!(results[1]["error"].as_str().unwrap().contains("checksum"));
}
