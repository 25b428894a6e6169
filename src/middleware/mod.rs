pub mod catalog_request;
pub mod login_request;
