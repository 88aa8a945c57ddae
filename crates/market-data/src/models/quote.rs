use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::Currency;

/// Latest price for a symbol, as returned by a price source.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Instant the price refers to
    pub timestamp: DateTime<Utc>,

    /// Last price (never negative)
    pub price: Decimal,

    /// Quote currency
    pub currency: Currency,

    /// Source of the quote (MOCK, COINGECKO)
    pub source: String,
}

impl PriceQuote {
    pub fn new(
        timestamp: DateTime<Utc>,
        price: Decimal,
        currency: impl Into<Currency>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            price,
            currency: currency.into(),
            source: source.into(),
        }
    }

    /// ISO-8601 rendering of the timestamp with millisecond precision,
    /// e.g. `2023-11-14T22:13:20.000Z`.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
