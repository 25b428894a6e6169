//! Catalog data model shared by the store, services and handlers.
//!
//! Field names serialize in camelCase to match the JSON the API serves.

pub mod brand;
pub mod product;
pub mod user;

pub use brand::Brand;
pub use product::Product;
pub use user::{Credential, UserRecord};
