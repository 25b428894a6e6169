use crate::db::CatalogStore;
use crate::error::StorefrontError;
use crate::types::Product;

/// Products belonging to `brand_id`, in store order.
///
/// The brand must exist: an unknown id is `BrandNotFound`, while a known brand
/// without products yields an empty list. Ids are compared as opaque strings.
pub fn products_for_brand(
    store: &CatalogStore,
    brand_id: &str,
) -> Result<Vec<Product>, StorefrontError> {
    if store.find_brand(brand_id).is_none() {
        return Err(StorefrontError::BrandNotFound(brand_id.to_string()));
    }

    Ok(store
        .list_products()
        .iter()
        .filter(|p| p.category_id == brand_id)
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Brand;

    fn store() -> CatalogStore {
        let brands = ["1", "2", "3"]
            .into_iter()
            .map(|id| Brand {
                id: id.into(),
                name: format!("Brand {id}"),
            })
            .collect();
        let products = [("a", "1"), ("b", "2"), ("c", "1"), ("d", "9")]
            .into_iter()
            .map(|(id, category_id)| Product {
                id: id.into(),
                category_id: category_id.into(),
                name: id.to_uppercase(),
                description: String::new(),
                price: 5.into(),
                image_urls: vec![],
            })
            .collect();
        CatalogStore::new(brands, products, vec![]).unwrap()
    }

    #[test]
    fn returns_only_matching_products_in_order() {
        let products = products_for_brand(&store(), "1").unwrap();
        let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert!(products.iter().all(|p| p.category_id == "1"));
    }

    #[test]
    fn known_brand_without_products_is_empty() {
        assert!(products_for_brand(&store(), "3").unwrap().is_empty());
    }

    #[test]
    fn unknown_brand_is_not_found() {
        let err = products_for_brand(&store(), "10").unwrap_err();
        assert!(matches!(err, StorefrontError::BrandNotFound(id) if id == "10"));
    }

    #[test]
    fn orphan_category_is_not_found() {
        // product "d" points at brand "9", which does not exist
        assert!(matches!(
            products_for_brand(&store(), "9"),
            Err(StorefrontError::BrandNotFound(_))
        ));
    }

    #[test]
    fn ids_are_not_coerced() {
        assert!(products_for_brand(&store(), "01").is_err());
        assert!(products_for_brand(&store(), " 1").is_err());
    }
}
