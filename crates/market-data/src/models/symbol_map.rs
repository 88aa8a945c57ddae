//! Static ticker lookup tables.

use rust_decimal::Decimal;

/// Normalize a caller-supplied ticker for table lookup.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.to_uppercase()
}

/// Immutable mapping from uppercase ticker to a value.
///
/// Entries keep their declaration order so that listings of supported
/// symbols are stable across runs.
#[derive(Debug)]
pub struct SymbolMap<T: 'static> {
    entries: &'static [(&'static str, T)],
}

impl<T: 'static> SymbolMap<T> {
    pub const fn new(entries: &'static [(&'static str, T)]) -> Self {
        Self { entries }
    }

    /// Look up a ticker. The input is uppercased first, so lookups are
    /// case-insensitive.
    pub fn get(&self, symbol: &str) -> Option<&'static T> {
        let key = normalize_symbol(symbol);
        let entries: &'static [(&'static str, T)] = self.entries;
        entries
            .iter()
            .find(|(ticker, _)| *ticker == key)
            .map(|(_, value)| value)
    }

    /// Supported tickers in declaration order.
    pub fn symbols(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(ticker, _)| *ticker).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Hardcoded price served in mock mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MockPriceRecord {
    pub price: Decimal,
    pub currency: &'static str,
}
