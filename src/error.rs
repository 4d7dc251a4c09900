use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::models::PRICE_ERROR_MESSAGE;

/// Everything that can go wrong between the catalog file and a priced response
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("gold API key is not configured")]
    MissingCredential,
    #[error("quote response has no usable `price` or `ask` field")]
    InvalidQuote,
    #[error("quote request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("could not load catalog from {path}: {reason}")]
    CatalogLoad { path: String, reason: String },
}

impl ApiError {
    /// Stable tag used in logs to tell failures apart.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MissingCredential => "missing_credential",
            ApiError::InvalidQuote => "invalid_quote",
            ApiError::Network(_) => "network_failure",
            ApiError::CatalogLoad { .. } => "catalog_load_failure",
        }
    }

    pub fn log(&self) {
        tracing::error!(kind = self.kind(), error = %self, "pricing failed");
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": PRICE_ERROR_MESSAGE })),
        )
            .into_response()
    }
}
