//! History Model (stock audit trail)
//!
//! Append-only: a record is written once per successful stock mutation and
//! never updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::stock::StockDirection;

/// Stock-affecting action (closed set)
///
/// Stored and serialized as the lowercase phrase, e.g. `"added stock"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryAction {
    #[serde(rename = "added stock")]
    AddedStock,
    #[serde(rename = "ordered stock")]
    OrderedStock,
    #[serde(rename = "sold stock")]
    SoldStock,
    #[serde(rename = "returned stock")]
    ReturnedStock,
    #[serde(rename = "adjusted stock")]
    AdjustedStock,
}

impl HistoryAction {
    pub const ALL: [HistoryAction; 5] = [
        HistoryAction::AddedStock,
        HistoryAction::OrderedStock,
        HistoryAction::SoldStock,
        HistoryAction::ReturnedStock,
        HistoryAction::AdjustedStock,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            HistoryAction::AddedStock => "added stock",
            HistoryAction::OrderedStock => "ordered stock",
            HistoryAction::SoldStock => "sold stock",
            HistoryAction::ReturnedStock => "returned stock",
            HistoryAction::AdjustedStock => "adjusted stock",
        }
    }

    /// Action recorded when the caller does not classify the change
    pub const fn default_for(direction: StockDirection) -> Self {
        match direction {
            StockDirection::Increase => HistoryAction::AddedStock,
            StockDirection::Decrease => HistoryAction::SoldStock,
        }
    }

    /// Whether this action may describe a shelf change in `direction`.
    ///
    /// `ordered stock` tracks the on-order quantity, never the shelf.
    pub const fn permits(&self, direction: StockDirection) -> bool {
        match self {
            HistoryAction::AddedStock | HistoryAction::ReturnedStock => {
                matches!(direction, StockDirection::Increase)
            }
            HistoryAction::SoldStock => matches!(direction, StockDirection::Decrease),
            HistoryAction::AdjustedStock => true,
            HistoryAction::OrderedStock => false,
        }
    }
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the known actions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown history action: {0:?}")]
pub struct UnknownAction(pub String);

impl FromStr for HistoryAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

impl TryFrom<String> for HistoryAction {
    type Error = UnknownAction;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Immutable history record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct HistoryRecord {
    pub history_id: i64,
    pub product_id: i64,
    pub shop_id: i64,
    #[cfg_attr(feature = "db", sqlx(try_from = "String"))]
    pub action: HistoryAction,
    /// Magnitude of the change (always positive)
    pub quantity_actions: i32,
    /// Shelf quantity before the change
    pub quantity_before: i32,
    /// Shelf quantity after the change
    pub quantity_after: i32,
    /// Assigned by the database at insertion
    pub action_date: DateTime<Utc>,
}

/// Create history payload; `action_date` is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryCreate {
    pub product_id: i64,
    pub shop_id: i64,
    pub action: HistoryAction,
    pub quantity_actions: i32,
    pub quantity_before: i32,
    pub quantity_after: i32,
}

/// History record joined with product and shop names for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct HistoryView {
    pub history_id: i64,
    pub product_id: i64,
    pub shop_id: i64,
    #[cfg_attr(feature = "db", sqlx(try_from = "String"))]
    pub action: HistoryAction,
    pub quantity_actions: i32,
    pub quantity_before: i32,
    pub quantity_after: i32,
    pub action_date: DateTime<Utc>,
    pub product_plu: String,
    pub product_name: String,
    pub shop_name: String,
}
