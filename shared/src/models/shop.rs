//! Shop Model

use serde::{Deserialize, Serialize};

/// Shop entity (seeded, read-only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Shop {
    pub shop_id: i64,
    pub shop_name: String,
}
