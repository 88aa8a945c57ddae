//! Price source abstractions and implementations.
//!
//! This module contains:
//! - The `PriceSource` trait that every source implements
//! - The per-source `LookupPolicy`
//! - Concrete sources: the static `MockSource` and the live `CoinGeckoProvider`
//!
//! Sources receive the caller's raw ticker. Translation from ticker to a
//! provider-specific identifier happens inside each source, against its own
//! static table.

mod capabilities;
mod traits;

pub mod coingecko;
pub mod mock;

// Re-exports
pub use capabilities::{LookupPolicy, SymbolEcho};
pub use traits::PriceSource;
