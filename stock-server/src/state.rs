//! Application state

use std::sync::Arc;

use crate::store::InventoryStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Inventory storage, PostgreSQL in production
    pub store: Arc<dyn InventoryStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }
}
