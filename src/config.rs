use std::path::PathBuf;

pub const DEFAULT_GOLD_API_URL: &str = "https://www.goldapi.io/api/XAU/USD";
pub const DEFAULT_PRODUCTS_PATH: &str = "products.json";
pub const DEFAULT_PORT: u16 = 5001;

/// Runtime settings read from the environment (and `.env`)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub gold_api_key: Option<String>,
    pub gold_api_url: String,
    pub products_path: PathBuf,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gold_api_key: None,
            gold_api_url: DEFAULT_GOLD_API_URL.into(),
            products_path: DEFAULT_PRODUCTS_PATH.into(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("ignoring invalid PORT {raw:?}, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        Self {
            gold_api_key: var("GOLD_API_KEY"),
            gold_api_url: var("GOLD_API_URL").unwrap_or(defaults.gold_api_url),
            products_path: var("PRODUCTS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.products_path),
            port,
        }
    }
}
