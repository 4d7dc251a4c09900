use reqwest::Client;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::catalog::gram_price;
use crate::models::EnrichedItem;
use crate::services::catalog::Catalog;

/// Client for the gold spot price provider
pub struct QuoteClient {
    pub http: Client,
    pub url: String,
    pub api_key: Option<String>,
}

impl QuoteClient {
    pub fn new(http: Client, url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            url: url.into(),
            api_key,
        }
    }

    /// Current gold price per troy ounce.
    pub async fn ounce_price(&self) -> Result<f64, ApiError> {
        let api_key = self.api_key.as_deref().ok_or(ApiError::MissingCredential)?;

        let quote: Value = self
            .http
            .get(&self.url)
            .header("x-access-token", api_key)
            .header("Content-Type", "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let price = extract_ounce_price(&quote)?;
        tracing::debug!("gold quote: {price:.2} per ounce");
        Ok(price)
    }

    /// Current gold price per gram.
    pub async fn gram_price(&self) -> Result<f64, ApiError> {
        Ok(gram_price(self.ounce_price().await?))
    }
}

/// Numbers and numeric strings both count as a quoted price.
fn quote_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Reads `price`, falling back to `ask` when `price` is missing, zero or not a number.
pub fn extract_ounce_price(quote: &Value) -> Result<f64, ApiError> {
    let usable = |field: &str| {
        quote
            .get(field)
            .and_then(quote_number)
            .filter(|p| p.is_finite() && *p != 0.0)
    };
    usable("price")
        .or_else(|| usable("ask"))
        .ok_or(ApiError::InvalidQuote)
}

/// Prices the whole catalog against a fresh quote. One failed quote fails everything.
pub async fn enriched_catalog(
    catalog: &Catalog,
    quotes: &QuoteClient,
) -> Result<Vec<EnrichedItem>, ApiError> {
    let grams = quotes.gram_price().await?;
    Ok(catalog.enrich(grams))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefers_price_over_ask() {
        let quote = json!({ "price": 2000.5, "ask": 2001.0 });
        assert_eq!(extract_ounce_price(&quote).unwrap(), 2000.5);
    }

    #[test]
    fn falls_back_to_ask() {
        assert_eq!(extract_ounce_price(&json!({ "ask": 1999 })).unwrap(), 1999.0);
        assert_eq!(
            extract_ounce_price(&json!({ "price": 0, "ask": 1999.25 })).unwrap(),
            1999.25
        );
        assert_eq!(
            extract_ounce_price(&json!({ "price": null, "ask": 1999.25 })).unwrap(),
            1999.25
        );
    }

    #[test]
    fn numeric_strings_are_accepted() {
        assert_eq!(extract_ounce_price(&json!({ "price": "2000" })).unwrap(), 2000.0);
        assert_eq!(
            extract_ounce_price(&json!({ "price": "0", "ask": " 1999.5 " })).unwrap(),
            1999.5
        );
    }

    #[test]
    fn quote_without_price_or_ask_is_invalid() {
        for quote in [
            json!({}),
            json!({ "bid": 2000 }),
            json!({ "price": 0, "ask": 0 }),
            json!({ "price": "n/a" }),
            json!({ "price": "NaN", "ask": "" }),
            json!([2000]),
        ] {
            assert!(matches!(
                extract_ounce_price(&quote),
                Err(ApiError::InvalidQuote)
            ));
        }
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        // Nothing listens on port 9, so any real request would be a network error.
        let client = QuoteClient::new(Client::new(), "http://127.0.0.1:9/quote", None);
        assert!(matches!(
            client.ounce_price().await,
            Err(ApiError::MissingCredential)
        ));
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_network_failure() {
        let client = QuoteClient::new(
            Client::new(),
            "http://127.0.0.1:9/quote",
            Some("goldapi-test".into()),
        );
        assert!(matches!(
            enriched_catalog(&Catalog::default(), &client).await,
            Err(ApiError::Network(_))
        ));
    }
}
