//! Plain JSON API for clients outside the bundled frontend.

use axum::{routing::get, Extension, Json, Router};
use tower_http::cors::CorsLayer;

use crate::error::ApiError;
use crate::models::EnrichedItem;
use crate::services::pricing::enriched_catalog;
use crate::state::AppState;

pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api/products", get(get_products))
        .layer(CorsLayer::permissive())
}

/// GET /api/products - the catalog priced at the current gold quote
pub async fn get_products(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<EnrichedItem>>, ApiError> {
    let products = enriched_catalog(&state.catalog, &state.quotes).await?;
    tracing::debug!("priced {} products", products.len());
    Ok(Json(products))
}
