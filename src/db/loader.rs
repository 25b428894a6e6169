use crate::db::seed::{BRANDS_JSON, PRODUCTS_JSON, USERS_JSON};
use crate::db::store::CatalogStore;
use crate::error::StorefrontError;
use crate::types::{Brand, Credential, Product, UserRecord};
use serde::de::DeserializeOwned;
use std::{fs, path::Path};
use tracing::info;

pub const BRANDS_FILE: &str = "brands.json";
pub const PRODUCTS_FILE: &str = "products.json";
pub const USERS_FILE: &str = "users.json";

/// Build the catalog from `data_dir` when given, otherwise from the bundled seed.
pub fn load_catalog(data_dir: Option<&Path>) -> Result<CatalogStore, StorefrontError> {
    match data_dir {
        Some(dir) => load_from_dir(dir),
        None => {
            info!("no catalog data directory configured; using bundled seed data");
            load_seed()
        }
    }
}

/// Load `brands.json`, `products.json` and `users.json` from a directory.
///
/// All three files are required.
pub fn load_from_dir(dir: &Path) -> Result<CatalogStore, StorefrontError> {
    let brands: Vec<Brand> = read_json(&dir.join(BRANDS_FILE))?;
    let products: Vec<Product> = read_json(&dir.join(PRODUCTS_FILE))?;
    let users: Vec<UserRecord> = read_json(&dir.join(USERS_FILE))?;

    info!(
        path = %dir.display(),
        brands = brands.len(),
        products = products.len(),
        users = users.len(),
        "catalog loaded from filesystem"
    );

    CatalogStore::new(brands, products, into_credentials(users))
}

pub fn load_seed() -> Result<CatalogStore, StorefrontError> {
    let brands: Vec<Brand> = serde_json::from_str(BRANDS_JSON)?;
    let products: Vec<Product> = serde_json::from_str(PRODUCTS_JSON)?;
    let users: Vec<UserRecord> = serde_json::from_str(USERS_JSON)?;
    CatalogStore::new(brands, products, into_credentials(users))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorefrontError> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| StorefrontError::DataFile {
        path: path.to_path_buf(),
        source,
    })
}

fn into_credentials(users: Vec<UserRecord>) -> Vec<Credential> {
    users.into_iter().map(Credential::from).collect()
}
