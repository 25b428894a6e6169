use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{StatusCode, Uri},
    response::Response,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::db::CatalogStore;
use crate::error::ApiErrorResponse;
use crate::handlers::{brands, login, products};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct StorefrontState {
    pub store: Arc<CatalogStore>,
    pub body_limit: usize,
}

impl StorefrontState {
    pub fn new(store: CatalogStore, body_limit: usize) -> Self {
        Self {
            store: Arc::new(store),
            body_limit,
        }
    }
}

pub fn storefront_router(state: StorefrontState) -> Router {
    let body_limit = state.body_limit;

    let api = Router::new()
        .route("/brands", get(brands::list_brands))
        .route("/brands/{id}/products", get(brands::brand_products))
        .route("/products", get(products::list_products))
        .route("/login", post(login::login));

    Router::new()
        .nest("/api", api)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> Response {
    ApiErrorResponse::with_status(
        StatusCode::NOT_FOUND,
        "NOT_FOUND",
        format!("No route for {}", uri.path()),
    )
}
