//! Request-independent catalog logic. Everything here is synchronous and pure.

pub mod brand_products;
pub mod login;
pub mod search;
