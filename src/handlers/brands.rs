use axum::{Json, extract::State};
use tracing::debug;

use crate::middleware::catalog_request::BrandIdPath;
use crate::service::brand_products::products_for_brand;
use crate::types::{Brand, Product};
use crate::{StorefrontError, router::StorefrontState};

/// GET /api/brands
pub async fn list_brands(State(state): State<StorefrontState>) -> Json<Vec<Brand>> {
    Json(state.store.list_brands().to_vec())
}

/// GET /api/brands/{id}/products -> 404 when the brand is unknown.
pub async fn brand_products(
    State(state): State<StorefrontState>,
    BrandIdPath(brand_id): BrandIdPath,
) -> Result<Json<Vec<Product>>, StorefrontError> {
    let products = products_for_brand(&state.store, &brand_id)
        .inspect_err(|_| debug!(brand_id = %brand_id, "brand lookup missed"))?;
    debug!(brand_id = %brand_id, count = products.len(), "brand products resolved");
    Ok(Json(products))
}
