use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    /// Id of the owning `Brand`.
    pub category_id: String,
    pub name: String,
    pub description: String,
    /// Kept as the stored JSON number so `150` is served as `150`, not `150.0`.
    pub price: Number,
    #[serde(default)]
    pub image_urls: Vec<String>,
}
