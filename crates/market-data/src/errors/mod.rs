//! Error types for price lookups.
//!
//! The `Display` text of every [`PriceSourceError`] variant is the message that is
//! safe to show to an API client. Diagnostic detail (upstream bodies, transport
//! errors) is carried in separate fields and only ever logged.

use thiserror::Error;

/// Errors that can occur while looking up a price.
#[derive(Error, Debug)]
pub enum PriceSourceError {
    /// The symbol is not present in the static mock price table.
    #[error("Symbol not found")]
    SymbolNotFound(String),

    /// The symbol has no provider identifier mapping.
    #[error("Unsupported symbol: {symbol}. Supported symbols: {supported}")]
    UnsupportedSymbol {
        /// The normalized (uppercased) symbol that was requested
        symbol: String,
        /// Comma-separated list of supported symbols, in table order
        supported: String,
    },

    /// The provider answered with a success status but the payload did not
    /// contain a usable price.
    #[error("Failed to retrieve price data from {provider}")]
    MalformedPayload {
        /// Display name of the provider
        provider: String,
        /// What was wrong with the payload
        detail: String,
    },

    /// The provider answered with a non-2xx status.
    #[error("External API error: {status_text}")]
    UpstreamStatus {
        /// Display name of the provider
        provider: String,
        /// HTTP status code returned by the provider
        status: u16,
        /// Canonical reason phrase for `status`
        status_text: String,
        /// Raw response body, for logging
        body: String,
    },

    /// The request was sent but no response was received.
    #[error("Bad Gateway: No response from external API ({provider})")]
    Unreachable {
        /// Display name of the provider
        provider: String,
        #[source]
        source: reqwest::Error,
    },

    /// The outbound request could not be built.
    #[error("Internal Server Error while fetching data from {provider}")]
    RequestSetup {
        /// Display name of the provider
        provider: String,
        /// Underlying error message
        message: String,
    },
}

impl PriceSourceError {
    /// Whether the error was caused by the caller's input rather than by the
    /// provider or the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::SymbolNotFound(_) | Self::UnsupportedSymbol { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_not_found_display() {
        let error = PriceSourceError::SymbolNotFound("XYZ".to_string());
        assert_eq!(format!("{}", error), "Symbol not found");
        assert!(error.is_client_error());
    }

    #[test]
    fn test_unsupported_symbol_display() {
        let error = PriceSourceError::UnsupportedSymbol {
            symbol: "ZZZ".to_string(),
            supported: "BTC, ETH".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Unsupported symbol: ZZZ. Supported symbols: BTC, ETH"
        );
        assert!(error.is_client_error());
    }

    #[test]
    fn test_upstream_status_hides_body() {
        let error = PriceSourceError::UpstreamStatus {
            provider: "CoinGecko".to_string(),
            status: 429,
            status_text: "Too Many Requests".to_string(),
            body: "{\"status\":{\"error_code\":429}}".to_string(),
        };
        assert_eq!(format!("{}", error), "External API error: Too Many Requests");
        assert!(!error.is_client_error());
    }

    #[test]
    fn test_malformed_payload_hides_detail() {
        let error = PriceSourceError::MalformedPayload {
            provider: "CoinGecko".to_string(),
            detail: "missing usd".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Failed to retrieve price data from CoinGecko"
        );
    }

    #[test]
    fn test_request_setup_display() {
        let error = PriceSourceError::RequestSetup {
            provider: "CoinGecko".to_string(),
            message: "relative URL without a base".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Internal Server Error while fetching data from CoinGecko"
        );
    }
}
