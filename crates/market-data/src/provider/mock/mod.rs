//! Static in-memory price source.
//!
//! Serves a fixed three-entry price table. Useful for local development and
//! for exercising the API without network access.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::errors::PriceSourceError;
use crate::models::{MockPriceRecord, PriceQuote, SymbolMap, USD};
use crate::provider::{LookupPolicy, PriceSource, SymbolEcho};

/// Provider ID constant
const PROVIDER_ID: &str = "MOCK";

/// Hardcoded prices, keyed by uppercase ticker.
pub static MOCK_PRICES: SymbolMap<MockPriceRecord> = SymbolMap::new(&[
    (
        "AAPL",
        MockPriceRecord {
            price: dec!(175.50),
            currency: USD,
        },
    ),
    (
        "BTC",
        MockPriceRecord {
            price: dec!(30000.00),
            currency: USD,
        },
    ),
    (
        "ETH",
        MockPriceRecord {
            price: dec!(2000.00),
            currency: USD,
        },
    ),
]);

/// Price source backed by [`MOCK_PRICES`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MockSource;

impl MockSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PriceSource for MockSource {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn policy(&self) -> LookupPolicy {
        LookupPolicy {
            symbol_echo: SymbolEcho::AsRequested,
            missing_symbol_message: "Missing \"symbol\" query parameter",
        }
    }

    fn supported_symbols(&self) -> Vec<&'static str> {
        MOCK_PRICES.symbols()
    }

    async fn latest_price(&self, symbol: &str) -> Result<PriceQuote, PriceSourceError> {
        let record = MOCK_PRICES
            .get(symbol)
            .ok_or_else(|| PriceSourceError::SymbolNotFound(symbol.to_string()))?;

        debug!("Serving mock price for {}", symbol);

        Ok(PriceQuote::new(
            Utc::now(),
            record.price,
            record.currency,
            PROVIDER_ID,
        ))
    }
}
