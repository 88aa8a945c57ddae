use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pricegate_market_data::PriceSourceError;
use thiserror::Error;

use crate::models::ErrorResponse;

/// Generic message for failures whose details must stay server-side.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    PriceSource(#[from] PriceSourceError),
    #[error("{0}")]
    MissingParameter(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::PriceSource(e) => {
                let status = match e {
                    PriceSourceError::SymbolNotFound(_) => StatusCode::NOT_FOUND,
                    PriceSourceError::UnsupportedSymbol { .. } => StatusCode::BAD_REQUEST,
                    PriceSourceError::MalformedPayload { .. }
                    | PriceSourceError::RequestSetup { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                    PriceSourceError::UpstreamStatus { status, .. } => {
                        StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
                    }
                    PriceSourceError::Unreachable { .. } => StatusCode::BAD_GATEWAY,
                };
                (status, e.to_string())
            }
            ApiError::MissingParameter(reason) | ApiError::BadRequest(reason) => {
                (StatusCode::BAD_REQUEST, reason.clone())
            }
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();

        match &self {
            ApiError::PriceSource(e) if e.is_client_error() => {
                tracing::warn!("Rejected symbol ({}): {:?}", status.as_u16(), e)
            }
            ApiError::PriceSource(PriceSourceError::UpstreamStatus {
                provider,
                status: upstream,
                body,
                ..
            }) => tracing::error!(
                "{} responded with HTTP {}: {}",
                provider,
                upstream,
                body
            ),
            ApiError::PriceSource(PriceSourceError::MalformedPayload { provider, detail }) => {
                tracing::error!("Unusable payload from {}: {}", provider, detail)
            }
            ApiError::PriceSource(PriceSourceError::Unreachable { provider, source }) => {
                tracing::error!("No response from {}: {:?}", provider, source)
            }
            ApiError::PriceSource(PriceSourceError::RequestSetup { provider, message }) => {
                tracing::error!("Could not build request to {}: {}", provider, message)
            }
            ApiError::Internal(detail) => tracing::error!("Internal error: {}", detail),
            _ => tracing::warn!("Rejected request ({}): {}", status.as_u16(), msg),
        }

        let body = Json(ErrorResponse { error: msg });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
