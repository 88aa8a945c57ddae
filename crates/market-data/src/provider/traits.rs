//! Price source trait definitions.
//!
//! This module defines the core `PriceSource` trait that the mock table and
//! the live CoinGecko proxy both implement.

use async_trait::async_trait;

use crate::errors::PriceSourceError;
use crate::models::PriceQuote;

use super::capabilities::LookupPolicy;

/// Trait for price sources.
///
/// Implement this trait to add a new source of prices. The HTTP layer only
/// sees `Arc<dyn PriceSource>` and never knows which implementation it is
/// talking to.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use pricegate_market_data::provider::{LookupPolicy, PriceSource, SymbolEcho};
///
/// struct FixedSource;
///
/// #[async_trait]
/// impl PriceSource for FixedSource {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     fn policy(&self) -> LookupPolicy {
///         LookupPolicy {
///             symbol_echo: SymbolEcho::Uppercase,
///             missing_symbol_message: "symbol required",
///         }
///     }
///
///     // ... implement supported_symbols and latest_price
/// }
/// ```
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Unique identifier for this source.
    ///
    /// Should be a constant string like "MOCK" or "COINGECKO".
    /// Used for logging and as `PriceQuote::source`.
    fn id(&self) -> &'static str;

    /// Presentation policy for lookups served by this source.
    fn policy(&self) -> LookupPolicy;

    /// Tickers this source can price, in a stable order.
    fn supported_symbols(&self) -> Vec<&'static str>;

    /// Fetch the latest price for a ticker.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The ticker exactly as the caller sent it. Implementations
    ///   normalize it themselves.
    ///
    /// # Returns
    ///
    /// The latest quote on success, or a `PriceSourceError` on failure.
    async fn latest_price(&self, symbol: &str) -> Result<PriceQuote, PriceSourceError>;
}
