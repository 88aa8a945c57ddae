//! Pricegate Market Data Crate
//!
//! This crate provides source-agnostic latest-price lookups for the
//! Pricegate server.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   HTTP handler   |  (raw ticker from the query string)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |   PriceSource    | --> |    SymbolMap     |  (static ticker tables)
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+
//! |  Mock / CoinGecko|  (in-memory table or outbound HTTP)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    PriceQuote    |
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`PriceSource`] - Trait implemented by every price source
//! - [`PriceQuote`] - Latest price with timestamp and currency
//! - [`LookupPolicy`] - How a source presents lookups to API clients
//! - [`PriceSourceError`] - Lookup failures, with client-safe messages

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::PriceSourceError;

pub use models::{normalize_symbol, MockPriceRecord, PriceQuote, SymbolMap, USD};

pub use provider::coingecko::{CoinGeckoProvider, COINGECKO_IDS};
pub use provider::mock::{MockSource, MOCK_PRICES};
pub use provider::{LookupPolicy, PriceSource, SymbolEcho};
