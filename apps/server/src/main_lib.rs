use std::sync::Arc;

use crate::config::{Config, PriceSourceKind};
use pricegate_market_data::{CoinGeckoProvider, MockSource, PriceSource};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    /// Source that answers `/data/price`; read-only after startup.
    pub price_source: Arc<dyn PriceSource>,
    pub banner: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let price_source: Arc<dyn PriceSource> = match config.price_source {
        PriceSourceKind::Mock => Arc::new(MockSource::new()),
        PriceSourceKind::Live => Arc::new(CoinGeckoProvider::with_base_url(
            config.coingecko_base_url.clone(),
            Some(config.effective_upstream_timeout()),
        )),
    };
    tracing::info!(
        "Price source in use: {} ({} symbols)",
        price_source.id(),
        price_source.supported_symbols().len()
    );

    Ok(Arc::new(AppState {
        price_source,
        banner: config.price_source.banner().to_string(),
    }))
}
