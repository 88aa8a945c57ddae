use std::{any::Any, sync::Arc};

use crate::{
    config::Config,
    error::ApiError,
    main_lib::AppState,
    models::{BannerResponse, ErrorResponse, PriceResponse, SymbolsResponse},
};
use axum::{
    extract::State,
    http::HeaderValue,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

mod price;

#[utoipa::path(get, path = "/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[utoipa::path(get, path = "/", responses((status = 200, body = BannerResponse)))]
pub async fn banner(State(state): State<Arc<AppState>>) -> Json<BannerResponse> {
    Json(BannerResponse {
        message: state.banner.clone(),
    })
}

#[derive(OpenApi)]
#[openapi(
    paths(healthz, banner, price::get_price, price::list_symbols),
    components(schemas(PriceResponse, ErrorResponse, BannerResponse, SymbolsResponse)),
    tags((name="pricegate"))
)]
pub struct ApiDoc;

/// Turns a handler panic into the generic 500 body instead of dropping the connection.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    let router = Router::new()
        .route("/", get(banner))
        .route("/healthz", get(healthz))
        .merge(price::router())
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state);

    with_layers(router, config)
}

fn with_layers(router: Router, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(AnyOrigin)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin {}", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        // Set must wrap Propagate so the generated id is visible on the way out.
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
