pub mod brands;
pub mod login;
pub mod products;
