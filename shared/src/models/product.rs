//! Product Model

use serde::{Deserialize, Serialize};

/// Maximum length of a PLU code
pub const PLU_MAX_LEN: u64 = 64;
/// Maximum length of a product name
pub const PRODUCT_NAME_MAX_LEN: u64 = 255;

/// Product entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub product_id: i64,
    /// Price Look-Up code, unique across products
    pub product_plu: String,
    pub product_name: String,
}

/// Create product payload (already trimmed and validated)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub product_plu: String,
    pub product_name: String,
}
