//! Price data models
//!
//! - `types` - Type aliases for common identifiers (Currency, ProviderAssetId)
//! - `quote` - The price quote returned by every source (PriceQuote)
//! - `symbol_map` - Static ticker tables (SymbolMap, MockPriceRecord)

mod quote;
mod symbol_map;
mod types;

pub use quote::PriceQuote;
pub use symbol_map::{normalize_symbol, MockPriceRecord, SymbolMap};
pub use types::{Currency, ProviderAssetId, USD};
