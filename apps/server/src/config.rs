use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{anyhow, Context};
use pricegate_market_data::provider::coingecko::DEFAULT_BASE_URL;

/// Which price source answers `/data/price`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceSourceKind {
    /// Static in-memory table
    Mock,
    /// CoinGecko proxy
    Live,
}

impl FromStr for PriceSourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "live" => Ok(Self::Live),
            other => Err(anyhow!(
                "Invalid PRICE_SOURCE '{}': expected 'mock' or 'live'",
                other
            )),
        }
    }
}

impl PriceSourceKind {
    /// Message served on `GET /`.
    pub fn banner(self) -> &'static str {
        match self {
            Self::Mock => "Simple Financial Data API is running! Serving mock prices.",
            Self::Live => "Enhanced Simple Financial Data API is running! Now fetching live crypto prices from CoinGecko.",
        }
    }
}

/// Fraction of the server request timeout granted to the upstream call.
const UPSTREAM_SHARE_OF_REQUEST_TIMEOUT: f64 = 0.8;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub price_source: PriceSourceKind,
    pub coingecko_base_url: String,
    pub upstream_timeout: Option<Duration>,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            price_source: PriceSourceKind::Live,
            coingecko_base_url: DEFAULT_BASE_URL.to_string(),
            upstream_timeout: None,
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let port: u16 = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT '{}'", raw))?,
            Err(_) => defaults.listen_addr.port(),
        };
        let price_source = match std::env::var("PRICE_SOURCE") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.price_source,
        };
        let coingecko_base_url = std::env::var("COINGECKO_BASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.coingecko_base_url);
        let upstream_timeout = std::env::var("UPSTREAM_TIMEOUT_MS")
            .ok()
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map(Duration::from_millis)
                    .with_context(|| format!("Invalid UPSTREAM_TIMEOUT_MS '{}'", raw))
            })
            .transpose()?;
        let cors_allow = std::env::var("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout = match std::env::var("REQUEST_TIMEOUT_MS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .with_context(|| format!("Invalid REQUEST_TIMEOUT_MS '{}'", raw))?,
            Err(_) => defaults.request_timeout,
        };

        Ok(Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            price_source,
            coingecko_base_url,
            upstream_timeout,
            cors_allow,
            request_timeout,
        })
    }

    /// Outbound timeout actually applied to the upstream client.
    ///
    /// Always ends before `request_timeout` so a hanging upstream is reported
    /// as a 502 by the handler instead of being cut off by the server timeout.
    pub fn effective_upstream_timeout(&self) -> Duration {
        let ceiling = self.request_timeout.mul_f64(UPSTREAM_SHARE_OF_REQUEST_TIMEOUT);
        self.upstream_timeout
            .map_or(ceiling, |timeout| timeout.min(ceiling))
    }
}
