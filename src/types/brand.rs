use serde::{Deserialize, Serialize};

/// A product grouping. Products reference it through `Product::category_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    pub id: String,
    pub name: String,
}
