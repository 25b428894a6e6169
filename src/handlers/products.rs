use axum::{Json, extract::State};
use tracing::debug;

use crate::middleware::catalog_request::SearchQuery;
use crate::router::StorefrontState;
use crate::service::search;
use crate::types::Product;

/// GET /api/products[?search=term]
pub async fn list_products(
    State(state): State<StorefrontState>,
    SearchQuery(term): SearchQuery,
) -> Json<Vec<Product>> {
    let products = search::filter(state.store.list_products(), term.as_deref());
    debug!(
        search = term.as_deref().unwrap_or("<none>"),
        count = products.len(),
        "product search"
    );
    Json(products)
}
