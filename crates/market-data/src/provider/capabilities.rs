//! Per-source lookup policy.
//!
//! The mock and live sources answer the same endpoint but disagree on a few
//! presentation details. Those details are described here so the HTTP layer
//! can stay source-agnostic.

/// How the `symbol` field of a successful response echoes the caller's input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolEcho {
    /// Return the symbol exactly as the caller sent it.
    AsRequested,
    /// Return the symbol uppercased.
    Uppercase,
}

impl SymbolEcho {
    pub fn apply(self, requested: &str) -> String {
        match self {
            SymbolEcho::AsRequested => requested.to_string(),
            SymbolEcho::Uppercase => requested.to_uppercase(),
        }
    }
}

/// Describes how a price source presents lookups to API clients.
#[derive(Clone, Debug)]
pub struct LookupPolicy {
    /// Case used when echoing the requested symbol.
    pub symbol_echo: SymbolEcho,

    /// Error message returned when the `symbol` query parameter is absent.
    pub missing_symbol_message: &'static str,
}
