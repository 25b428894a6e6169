//! Seed catalog bundled into the binary, used when no data directory is configured.

pub const BRANDS_JSON: &str = include_str!("../../data/brands.json");
pub const PRODUCTS_JSON: &str = include_str!("../../data/products.json");
pub const USERS_JSON: &str = include_str!("../../data/users.json");
