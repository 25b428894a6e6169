use crate::error::StorefrontError;
use crate::types::{Brand, Credential, Product};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Brands, products and credentials held for the lifetime of the process.
///
/// Built once at startup and only read afterwards; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    brands: Vec<Brand>,
    products: Vec<Product>,
    credentials: HashMap<String, Credential>,
}

impl CatalogStore {
    /// Build a store, rejecting duplicate brand ids, product ids or usernames.
    ///
    /// Products pointing at an unknown brand are kept but logged; they are only
    /// reachable through the product listing.
    pub fn new(
        brands: Vec<Brand>,
        products: Vec<Product>,
        credentials: Vec<Credential>,
    ) -> Result<Self, StorefrontError> {
        let mut brand_ids = HashSet::with_capacity(brands.len());
        for brand in &brands {
            if !brand_ids.insert(brand.id.as_str()) {
                return Err(StorefrontError::DuplicateBrandId(brand.id.clone()));
            }
        }

        let mut product_ids = HashSet::with_capacity(products.len());
        for product in &products {
            if !product_ids.insert(product.id.as_str()) {
                return Err(StorefrontError::DuplicateProductId(product.id.clone()));
            }
            if !brand_ids.contains(product.category_id.as_str()) {
                warn!(
                    product_id = %product.id,
                    category_id = %product.category_id,
                    "product references unknown brand"
                );
            }
        }

        let mut by_username = HashMap::with_capacity(credentials.len());
        for cred in credentials {
            if by_username.contains_key(&cred.username) {
                return Err(StorefrontError::DuplicateUsername(cred.username));
            }
            by_username.insert(cred.username.clone(), cred);
        }

        Ok(Self {
            brands,
            products,
            credentials: by_username,
        })
    }

    pub fn list_brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    pub fn find_brand(&self, id: &str) -> Option<&Brand> {
        self.brands.iter().find(|b| b.id == id)
    }

    pub fn find_credential(&self, username: &str) -> Option<&Credential> {
        self.credentials.get(username)
    }

    pub fn credential_count(&self) -> usize {
        self.credentials.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(id: &str) -> Brand {
        Brand {
            id: id.into(),
            name: format!("Brand {id}"),
        }
    }

    fn product(id: &str, category_id: &str) -> Product {
        Product {
            id: id.into(),
            category_id: category_id.into(),
            name: format!("Product {id}"),
            description: String::new(),
            price: 10.into(),
            image_urls: vec![],
        }
    }

    fn cred(username: &str) -> Credential {
        Credential {
            username: username.into(),
            password: "secret".into(),
        }
    }

    #[test]
    fn rejects_duplicate_brand_ids() {
        let err = CatalogStore::new(vec![brand("1"), brand("1")], vec![], vec![]).unwrap_err();
        assert!(matches!(err, StorefrontError::DuplicateBrandId(id) if id == "1"));
    }

    #[test]
    fn rejects_duplicate_product_ids() {
        let err = CatalogStore::new(
            vec![brand("1")],
            vec![product("7", "1"), product("7", "1")],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, StorefrontError::DuplicateProductId(id) if id == "7"));
    }

    #[test]
    fn rejects_duplicate_usernames() {
        let err = CatalogStore::new(vec![], vec![], vec![cred("amy"), cred("amy")]).unwrap_err();
        assert!(matches!(err, StorefrontError::DuplicateUsername(name) if name == "amy"));
    }

    #[test]
    fn keeps_orphan_products_and_order() {
        let store = CatalogStore::new(
            vec![brand("1")],
            vec![product("b", "1"), product("a", "99")],
            vec![cred("amy")],
        )
        .unwrap();

        let ids: Vec<_> = store.list_products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert!(store.find_brand("99").is_none());
        assert_eq!(store.find_credential("amy"), Some(&cred("amy")));
        assert!(store.find_credential("bob").is_none());
    }
}
