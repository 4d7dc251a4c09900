use std::sync::Arc;

use crate::config::Config;
use crate::services::{Catalog, QuoteClient};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub quotes: Arc<QuoteClient>,
}

impl AppState {
    pub fn new(catalog: Catalog, quotes: QuoteClient) -> Self {
        Self {
            catalog: Arc::new(catalog),
            quotes: Arc::new(quotes),
        }
    }

    /// Loads the catalog and wires the quote client from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Catalog::load_or_empty(&config.products_path),
            QuoteClient::new(
                reqwest::Client::new(),
                config.gold_api_url.clone(),
                config.gold_api_key.clone(),
            ),
        )
    }
}
