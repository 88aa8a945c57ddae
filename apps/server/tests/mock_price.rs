mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::{get_json, mock_router};

#[tokio::test]
async fn lowercase_symbol_is_echoed_as_sent() {
    let before = Utc::now();
    let (status, body) = get_json(mock_router().await, "/data/price?symbol=btc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["symbol"], "btc");
    assert_eq!(body["price"].as_f64(), Some(30000.0));
    assert_eq!(body["currency"], "USD");

    let timestamp = DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).unwrap();
    assert!(timestamp.with_timezone(&Utc) <= Utc::now());
    assert!(timestamp.with_timezone(&Utc) >= before - chrono::Duration::seconds(1));
}

#[tokio::test]
async fn every_mock_symbol_resolves_in_any_case() {
    for symbol in ["AAPL", "aapl", "Btc", "eTH"] {
        let uri = format!("/data/price?symbol={}", symbol);
        let (status, body) = get_json(mock_router().await, &uri).await;
        assert_eq!(status, StatusCode::OK, "{symbol}");
        assert_eq!(body["symbol"], symbol);
        assert_eq!(body["currency"], "USD");
        assert!(body["price"].as_f64().unwrap() >= 0.0);
    }
}

#[tokio::test]
async fn unknown_symbol_is_404() {
    let (status, body) = get_json(mock_router().await, "/data/price?symbol=XYZ").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({ "error": "Symbol not found" }));
}

#[tokio::test]
async fn missing_symbol_is_400() {
    for uri in ["/data/price", "/data/price?currency=usd", "/data/price?symbol="] {
        let (status, body) = get_json(mock_router().await, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            body,
            serde_json::json!({ "error": "Missing \"symbol\" query parameter" })
        );
    }
}
