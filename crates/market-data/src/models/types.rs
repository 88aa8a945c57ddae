use std::borrow::Cow;

/// Currency code (ISO 4217) - mostly static
pub type Currency = Cow<'static, str>;

/// Provider-specific asset identifier (e.g. "bitcoin" for BTC on CoinGecko)
pub type ProviderAssetId = &'static str;

/// The only quote currency served by this crate.
pub const USD: &str = "USD";
