use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{ErrorResponse, PriceQuery, PriceResponse, SymbolsResponse},
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

/// Latest price for one ticker.
///
/// The symbol is echoed back in the case dictated by the active source's
/// lookup policy.
#[utoipa::path(
    get,
    path = "/data/price",
    params(("symbol" = Option<String>, Query, description = "Ticker, e.g. BTC")),
    responses(
        (status = 200, body = PriceResponse),
        (status = 400, body = ErrorResponse, description = "Missing or unsupported symbol"),
        (status = 404, body = ErrorResponse, description = "Unknown symbol (mock source)"),
        (status = 500, body = ErrorResponse),
        (status = 502, body = ErrorResponse, description = "No response from the upstream API"),
    )
)]
pub async fn get_price(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PriceQuery>, QueryRejection>,
) -> ApiResult<Json<PriceResponse>> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let policy = state.price_source.policy();

    let symbol = query
        .symbol
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::MissingParameter(policy.missing_symbol_message.to_string()))?;

    let quote = state.price_source.latest_price(&symbol).await?;
    Ok(Json(PriceResponse::from_quote(
        policy.symbol_echo.apply(&symbol),
        quote,
    )))
}

#[utoipa::path(get, path = "/data/symbols", responses((status = 200, body = SymbolsResponse)))]
pub async fn list_symbols(State(state): State<Arc<AppState>>) -> Json<SymbolsResponse> {
    Json(SymbolsResponse {
        source: state.price_source.id().to_string(),
        symbols: state
            .price_source
            .supported_symbols()
            .into_iter()
            .map(String::from)
            .collect(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/data/price", get(get_price))
        .route("/data/symbols", get(list_symbols))
}
