//! Catalog storage: the immutable in-memory store and the code that fills it.
//!
//! Layout:
//! - `store.rs`: `CatalogStore`, read-only access to brands, products and credentials
//! - `loader.rs`: builds a store from a data directory or from the bundled seed
//! - `seed.rs`: seed JSON compiled into the binary

pub mod loader;
pub mod seed;
pub mod store;

pub use loader::{load_catalog, load_from_dir};
pub use store::CatalogStore;
