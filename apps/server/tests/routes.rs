mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use common::{get_json, live_router, mock_router};
use tower::ServiceExt;

#[tokio::test]
async fn healthz_works() {
    let response = mock_router()
        .await
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body, "ok".as_bytes());
}

#[tokio::test]
async fn root_serves_banner_for_each_source() {
    let (status, body) = get_json(live_router("http://127.0.0.1:9").await, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Enhanced Simple Financial Data API is running! Now fetching live crypto prices from CoinGecko."
    );

    let (status, body) = get_json(mock_router().await, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("running"));
}

#[tokio::test]
async fn symbols_lists_active_source_table() {
    let (status, body) = get_json(mock_router().await, "/data/symbols").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({ "source": "MOCK", "symbols": ["AAPL", "BTC", "ETH"] })
    );

    let (_, body) = get_json(live_router("http://127.0.0.1:9").await, "/data/symbols").await;
    assert_eq!(body["source"], "COINGECKO");
    assert_eq!(body["symbols"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let response = mock_router()
        .await
        .oneshot(
            Request::builder()
                .uri("/data/price?symbol=ETH")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, body) = get_json(mock_router().await, "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/data/price"].is_object());
}
