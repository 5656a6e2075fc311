//! Stock Model
//!
//! One row per (product, shop) pair. Shelf quantity is mutated only through
//! increase/decrease, each of which appends a history record.

use serde::{Deserialize, Serialize};

use super::history::HistoryAction;

/// Stock row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Stock {
    pub stock_id: i64,
    pub product_id: i64,
    pub shop_id: i64,
    /// Quantity on the shelf, never negative
    pub stock_quantity: i32,
    /// Quantity on order
    pub stock_order: i32,
}

/// Stock joined with its product and shop, as listed by the filter endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StockView {
    pub stock_id: i64,
    pub product_id: i64,
    pub product_plu: String,
    pub product_name: String,
    pub shop_id: i64,
    pub shop_name: String,
    pub stock_quantity: i32,
    pub stock_order: i32,
}

/// Create stock payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockCreate {
    pub product_id: i64,
    pub shop_id: i64,
    pub stock_quantity: i32,
    pub stock_order: i32,
}

/// Direction of a shelf quantity change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockDirection {
    Increase,
    Decrease,
}

/// A validated shelf quantity change
///
/// `amount` is always positive; the sign comes from `direction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockChange {
    pub product_id: i64,
    pub shop_id: i64,
    pub direction: StockDirection,
    pub amount: i32,
    pub action: HistoryAction,
}

impl StockChange {
    /// Apply this change to a shelf quantity.
    ///
    /// Returns `None` when the result would be negative or overflow `i32`.
    pub fn apply_to(&self, quantity: i32) -> Option<i32> {
        let next = match self.direction {
            StockDirection::Increase => quantity.checked_add(self.amount)?,
            StockDirection::Decrease => quantity.checked_sub(self.amount)?,
        };
        (next >= 0).then_some(next)
    }

    /// Signed delta for SQL arithmetic
    pub fn delta(&self) -> i32 {
        match self.direction {
            StockDirection::Increase => self.amount,
            StockDirection::Decrease => -self.amount,
        }
    }
}
