//! Inventory store abstraction
//!
//! Handlers and services talk to storage only through [`InventoryStore`].
//! The production implementation is [`crate::db::PgStore`]; tests use the
//! in-memory store in [`memory`].

pub mod filters;
#[cfg(test)]
pub mod memory;

pub use filters::{HistoryFilter, ProductFilter, QuantityRange, StockFilter};

use async_trait::async_trait;
use shared::models::{
    HistoryRecord, HistoryView, Product, ProductCreate, Stock, StockChange, StockCreate, StockView,
};
use shared::{PageRequest, Paginated};

use crate::error::StoreResult;

/// Result of a successful stock mutation: the updated row and its audit entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockMutation {
    pub stock: Stock,
    pub history: HistoryRecord,
}

#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Database server version string (liveness probe)
    async fn server_version(&self) -> StoreResult<String>;

    async fn create_product(&self, data: &ProductCreate) -> StoreResult<Product>;

    async fn create_stock(&self, data: &StockCreate) -> StoreResult<Stock>;

    /// Apply a shelf quantity change and append its history record atomically.
    ///
    /// Either both the stock update and the history insert are persisted or
    /// neither is. A decrease never leaves `stock_quantity` negative, even
    /// under concurrent calls for the same pair.
    async fn apply_stock_change(&self, change: &StockChange) -> StoreResult<StockMutation>;

    async fn find_products(&self, filter: &ProductFilter) -> StoreResult<Vec<Product>>;

    async fn find_stocks(&self, filter: &StockFilter) -> StoreResult<Vec<StockView>>;

    /// Filtered history, most recent first, with the unpaginated total
    async fn find_history(
        &self,
        filter: &HistoryFilter,
        page: PageRequest,
    ) -> StoreResult<Paginated<HistoryView>>;
}
