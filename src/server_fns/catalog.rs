use leptos::prelude::*;

use crate::models::EnrichedItem;

/// Catalog priced at the current gold quote, for the carousel page
#[server]
pub async fn get_products() -> Result<Vec<EnrichedItem>, ServerFnError> {
    use crate::models::PRICE_ERROR_MESSAGE;
    use crate::services::pricing::enriched_catalog;
    use crate::state::AppState;
    use axum::Extension;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    enriched_catalog(&state.catalog, &state.quotes)
        .await
        .map_err(|e| {
            e.log();
            ServerFnError::new(PRICE_ERROR_MESSAGE)
        })
}
