#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use pricegate_server::{
    api::app_router,
    build_state,
    config::{Config, PriceSourceKind},
};
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;

pub async fn mock_router() -> Router {
    let config = Config {
        price_source: PriceSourceKind::Mock,
        ..Config::default()
    };
    let state = build_state(&config).await.unwrap();
    app_router(state, &config)
}

pub async fn live_router(base_url: &str) -> Router {
    live_router_with_timeout(base_url, Config::default().request_timeout).await
}

pub async fn live_router_with_timeout(base_url: &str, request_timeout: Duration) -> Router {
    let config = Config {
        price_source: PriceSourceKind::Live,
        coingecko_base_url: base_url.to_string(),
        request_timeout,
        ..Config::default()
    };
    let state = build_state(&config).await.unwrap();
    app_router(state, &config)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}
