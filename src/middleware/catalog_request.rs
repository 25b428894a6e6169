use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};

use crate::error::StorefrontError;

/// `{id}` segment of `/api/brands/{id}/products`, with decode failures
/// reported through the standard error body.
pub struct BrandIdPath(pub String);

impl<S> FromRequestParts<S> for BrandIdPath
where
    S: Send + Sync,
{
    type Rejection = StorefrontError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| StorefrontError::InvalidRequest(rejection.body_text()))?;
        Ok(BrandIdPath(id))
    }
}

/// Optional `search` query parameter. The first occurrence wins; repeated or
/// unrelated parameters never fail the request.
pub struct SearchQuery(pub Option<String>);

impl<S> FromRequestParts<S> for SearchQuery
where
    S: Send + Sync,
{
    type Rejection = StorefrontError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| StorefrontError::InvalidRequest(rejection.body_text()))?;
        let search = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "search").then_some(value));
        Ok(SearchQuery(search))
    }
}
