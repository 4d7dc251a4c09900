use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ApiError;
use crate::models::catalog::{enrich_all, slugify};
use crate::models::{CatalogItem, EnrichedItem};

/// The static product list, loaded once at startup and only read afterwards
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn load(path: &Path) -> Result<Self, ApiError> {
        let failure = |reason: String| ApiError::CatalogLoad {
            path: path.display().to_string(),
            reason,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| failure(e.to_string()))?;
        let items: Vec<CatalogItem> =
            serde_json::from_str(&raw).map_err(|e| failure(e.to_string()))?;

        let catalog = Self::new(items);
        let duplicates = catalog.duplicate_ids();
        if !duplicates.is_empty() {
            tracing::warn!(?duplicates, "catalog names collide after slugging");
        }
        tracing::info!("loaded {} products from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Loads the catalog, or logs the failure and serves an empty one.
    pub fn load_or_empty(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            e.log();
            Self::default()
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids produced by more than one catalog name, sorted.
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for item in &self.items {
            *counts.entry(slugify(&item.name)).or_default() += 1;
        }
        counts
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn enrich(&self, gram_price: f64) -> Vec<EnrichedItem> {
        enrich_all(&self.items, gram_price)
    }
}
