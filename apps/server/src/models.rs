use pricegate_market_data::PriceQuote;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Successful `/data/price` body.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PriceResponse {
    pub symbol: String,
    #[schema(value_type = f64)]
    #[serde(serialize_with = "serialize_price")]
    pub price: Decimal,
    pub currency: String,
    /// ISO-8601 instant, millisecond precision
    pub timestamp: String,
}

/// Writes the price as the JSON number nearest to its decimal text.
fn serialize_price<S: Serializer>(price: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    let value: f64 = price
        .to_string()
        .parse()
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_f64(value)
}

impl PriceResponse {
    pub fn from_quote(symbol: String, quote: PriceQuote) -> Self {
        Self {
            symbol,
            price: quote.price,
            timestamp: quote.timestamp_iso(),
            currency: quote.currency.into_owned(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct BannerResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct SymbolsResponse {
    pub source: String,
    pub symbols: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct PriceQuery {
    pub symbol: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_response_serializes_price_as_number() {
        let quote = PriceQuote::new(
            Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            dec!(2000.5),
            "USD",
            "COINGECKO",
        );
        let body = serde_json::to_value(PriceResponse::from_quote("ETH".into(), quote)).unwrap();
        assert_eq!(body["symbol"], "ETH");
        assert_eq!(body["price"].as_f64(), Some(2000.5));
        assert_eq!(body["currency"], "USD");
        assert_eq!(body["timestamp"], "2023-11-14T22:13:20.000Z");
    }

    #[test]
    fn test_price_keeps_seventeen_significant_digits() {
        let quote = PriceQuote::new(
            Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            dec!(1234.5678901234567),
            "USD",
            "COINGECKO",
        );
        let body = serde_json::to_value(PriceResponse::from_quote("BTC".into(), quote)).unwrap();
        assert_eq!(body["price"].as_f64(), Some(1234.5678901234567));
    }
}
