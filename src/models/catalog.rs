use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Grams in one troy ounce; quotes arrive per ounce, prices are computed per gram.
pub const GRAMS_PER_TROY_OUNCE: f64 = 31.1035;

/// Message shown to API clients whenever pricing fails, whatever the cause.
pub const PRICE_ERROR_MESSAGE: &str = "Could not fetch the gold price, API error.";

/// A product as stored in the static catalog file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity_score: Option<f64>,
    /// Weight in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Image reference per colour code (`yellow`, `white`, `rose`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<BTreeMap<String, String>>,
    /// Any other fields on the catalog entry, passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A catalog item priced against the current gold quote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedItem {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub id: String,
    /// Serialized as `null` when the item has no usable weight or score
    #[serde(deserialize_with = "nan_if_null")]
    pub price: f64,
    #[serde(rename = "scoreOutOf5")]
    pub score_out_of_5: String,
}

impl EnrichedItem {
    /// Numeric rating for the star display; unparsable scores count as zero.
    pub fn rating(&self) -> f64 {
        self.score_out_of_5
            .parse::<f64>()
            .ok()
            .filter(|score| score.is_finite())
            .unwrap_or(0.0)
    }

    /// Price as shown on a product card, e.g. `$964.52 USD`.
    pub fn price_label(&self) -> String {
        format!("${:.2} USD", self.price)
    }
}

fn nan_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Lowercase slug of a display name: every whitespace character becomes `-`.
pub fn slugify(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Fixed-point text for `value`, rounding its exact binary value to `places`
/// decimals. Exact halves (only possible for dyadic values such as 0.125)
/// round away from zero.
pub fn to_fixed(value: f64, places: usize) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }

    // |value| * 2^(places+1) is exact; an odd integer there means a tie
    let doubled = value.abs() * 2f64.powi(places as i32 + 1);
    let is_tie = doubled < 2f64.powi(100) && doubled.fract() == 0.0 && doubled % 2.0 == 1.0;
    let rounded_up = 5u128
        .checked_pow(places as u32)
        .and_then(|five| (doubled as u128).checked_mul(five))
        .map(|scaled| (scaled + 1) / 2);

    match rounded_up {
        Some(n) if is_tie => {
            let sign = if value < 0.0 { "-" } else { "" };
            let scale = 10u128.pow(places as u32);
            if places == 0 {
                format!("{sign}{n}")
            } else {
                format!("{sign}{}.{:0width$}", n / scale, n % scale, width = places)
            }
        }
        _ => format!("{:.*}", places, value),
    }
}

/// Converts a per-ounce quote into a per-gram reference price.
pub fn gram_price(ounce_price: f64) -> f64 {
    ounce_price / GRAMS_PER_TROY_OUNCE
}

/// Prices a single item. Missing numeric fields yield NaN rather than an error.
pub fn enrich_item(item: &CatalogItem, gram_price: f64) -> EnrichedItem {
    let score = item.popularity_score.unwrap_or(f64::NAN);
    let weight = item.weight.unwrap_or(f64::NAN);
    let price = (score + 1.0) * weight * gram_price;

    EnrichedItem {
        item: item.clone(),
        id: slugify(&item.name),
        price: to_fixed(price, 2).parse().unwrap_or(f64::NAN),
        score_out_of_5: to_fixed(score * 5.0, 1),
    }
}

/// Prices every item, keeping catalog order.
pub fn enrich_all(items: &[CatalogItem], gram_price: f64) -> Vec<EnrichedItem> {
    items.iter().map(|item| enrich_item(item, gram_price)).collect()
}
