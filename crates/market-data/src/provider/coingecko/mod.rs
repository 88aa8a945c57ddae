//! CoinGecko price source.
//!
//! Proxies lookups to the public CoinGecko `/simple/price` endpoint. No API
//! key is needed for this endpoint. Tickers are translated to CoinGecko's
//! own asset identifiers through a static table; anything outside the table
//! is rejected before any network call is made.
//!
//! API documentation: https://docs.coingecko.com/reference/simple-price

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::errors::PriceSourceError;
use crate::models::{normalize_symbol, PriceQuote, ProviderAssetId, SymbolMap, USD};
use crate::provider::{LookupPolicy, PriceSource, SymbolEcho};

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";
const PROVIDER_ID: &str = "COINGECKO";
const PROVIDER_NAME: &str = "CoinGecko";

/// Ticker to CoinGecko asset id.
pub static COINGECKO_IDS: SymbolMap<ProviderAssetId> = SymbolMap::new(&[
    ("BTC", "bitcoin"),
    ("ETH", "ethereum"),
    ("BNB", "binancecoin"),
    ("SOL", "solana"),
    ("XRP", "ripple"),
    ("ADA", "cardano"),
    ("DOGE", "dogecoin"),
    ("DOT", "polkadot"),
    ("AVAX", "avalanche-2"),
    ("LINK", "chainlink"),
]);

/// One entry of the `/simple/price` response, keyed by asset id.
#[derive(Debug, Deserialize)]
struct SimplePrice {
    /// Price in USD
    usd: Option<f64>,
    /// Unix seconds of the last price update; a number or a numeric string
    last_updated_at: Option<Value>,
}

/// Live price source backed by the CoinGecko API.
///
/// # Example
///
/// ```ignore
/// use pricegate_market_data::CoinGeckoProvider;
///
/// let provider = CoinGeckoProvider::new();
/// let quote = provider.latest_price("eth").await?;
/// ```
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinGeckoProvider {
    /// Create a provider for the public API using the HTTP client's default timeout.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, None)
    }

    /// Create a provider for a custom API root (e.g. a proxy or a test server).
    ///
    /// `timeout` is applied to every outbound request when set.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!(
                "Failed to build CoinGecko HTTP client ({}); using defaults without timeout",
                e
            );
            Client::new()
        });
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    /// Translate a caller ticker into `(normalized ticker, CoinGecko id)`.
    fn resolve(symbol: &str) -> Result<(String, ProviderAssetId), PriceSourceError> {
        let normalized = normalize_symbol(symbol);
        match COINGECKO_IDS.get(&normalized) {
            Some(id) => Ok((normalized, *id)),
            None => Err(PriceSourceError::UnsupportedSymbol {
                symbol: normalized,
                supported: COINGECKO_IDS.symbols().join(", "),
            }),
        }
    }

    fn malformed(detail: impl Into<String>) -> PriceSourceError {
        PriceSourceError::MalformedPayload {
            provider: PROVIDER_NAME.to_string(),
            detail: detail.into(),
        }
    }

    /// Call `/simple/price` for one asset id and return the raw body.
    async fn fetch(&self, coin_id: &str) -> Result<String, PriceSourceError> {
        let url = format!("{}/simple/price", self.base_url);

        debug!("CoinGecko request: {} ids={}", url, coin_id);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ids", coin_id),
                ("vs_currencies", "usd"),
                ("include_last_updated_at", "true"),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    error!("Error setting up request to CoinGecko API: {}", e);
                    PriceSourceError::RequestSetup {
                        provider: PROVIDER_NAME.to_string(),
                        message: e.to_string(),
                    }
                } else {
                    error!("No response received from CoinGecko API: {}", e);
                    PriceSourceError::Unreachable {
                        provider: PROVIDER_NAME.to_string(),
                        source: e,
                    }
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("CoinGecko API error response: {} {}", status.as_u16(), body);
            return Err(PriceSourceError::UpstreamStatus {
                provider: PROVIDER_NAME.to_string(),
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
                body,
            });
        }

        response.text().await.map_err(|e| {
            error!("Failed to read CoinGecko response body: {}", e);
            Self::malformed(format!("Failed to read response: {}", e))
        })
    }

    /// Whole Unix seconds from a numeric or string timestamp, fractions truncated.
    fn unix_seconds(value: &Value) -> Option<i64> {
        let secs = match value {
            Value::Number(n) => match n.as_i64() {
                Some(secs) => return Some(secs),
                None => n.as_f64()?,
            },
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        if !secs.is_finite() || secs.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(secs.trunc() as i64)
    }

    /// Turn a `/simple/price` body into a quote for `coin_id`.
    fn parse_quote(body: &str, coin_id: &str) -> Result<PriceQuote, PriceSourceError> {
        let mut prices: HashMap<String, SimplePrice> = serde_json::from_str(body).map_err(|e| {
            error!("Unexpected data structure from CoinGecko: {} ({})", body, e);
            Self::malformed(format!("Invalid JSON: {}", e))
        })?;

        let entry = prices.remove(coin_id).ok_or_else(|| {
            error!("Unexpected data structure from CoinGecko: {}", body);
            Self::malformed(format!("No entry for {}", coin_id))
        })?;

        let usd = entry.usd.ok_or_else(|| {
            error!("Unexpected data structure from CoinGecko: {}", body);
            Self::malformed(format!("No usd price for {}", coin_id))
        })?;

        if !usd.is_finite() || usd < 0.0 {
            error!("CoinGecko returned an invalid price for {}: {}", coin_id, usd);
            return Err(Self::malformed(format!("Invalid price: {}", usd)));
        }

        // `f64` display is the shortest text that reads back as the same float,
        // so the decimal carries exactly the digits CoinGecko sent.
        let price = Decimal::from_str_exact(&usd.to_string())
            .or_else(|_| Decimal::try_from(usd))
            .map_err(|e| Self::malformed(format!("Price {} is not a decimal: {}", usd, e)))?;

        // A zero, unreadable or out-of-range update time falls back to "now".
        let timestamp = entry
            .last_updated_at
            .as_ref()
            .and_then(Self::unix_seconds)
            .filter(|secs| *secs != 0)
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .unwrap_or_else(Utc::now);

        Ok(PriceQuote::new(timestamp, price, USD, PROVIDER_ID))
    }
}

#[async_trait]
impl PriceSource for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn policy(&self) -> LookupPolicy {
        LookupPolicy {
            symbol_echo: SymbolEcho::Uppercase,
            missing_symbol_message: "Missing required query parameter: symbol (e.g., BTC, ETH)",
        }
    }

    fn supported_symbols(&self) -> Vec<&'static str> {
        COINGECKO_IDS.symbols()
    }

    async fn latest_price(&self, symbol: &str) -> Result<PriceQuote, PriceSourceError> {
        let (ticker, coin_id) = Self::resolve(symbol)?;
        let body = self.fetch(coin_id).await?;
        let quote = Self::parse_quote(&body, coin_id)?;

        debug!("CoinGecko price for {}: {} {}", ticker, quote.price, quote.currency);

        Ok(quote)
    }
}
