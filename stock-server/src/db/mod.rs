//! PostgreSQL store
//!
//! `PgStore` owns the connection pool and implements [`InventoryStore`] by
//! delegating to the per-table modules.

pub mod filter;
pub mod history;
pub mod products;
pub mod stocks;

use async_trait::async_trait;
use shared::models::{
    HistoryView, Product, ProductCreate, Stock, StockChange, StockCreate, StockView,
};
use shared::{PageRequest, Paginated};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;
use crate::error::StoreResult;
use crate::store::{HistoryFilter, InventoryStore, ProductFilter, StockFilter, StockMutation};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Open the pool and apply pending migrations when enabled
    pub async fn connect(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(config.db_acquire_timeout)
            .connect(&config.database_url)
            .await
            .map_err(|e| format!("Failed to connect to database: {e}"))?;
        tracing::info!(
            max_connections = config.db_max_connections,
            "Database connection established"
        );

        if config.run_migrations {
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| format!("Failed to apply migrations: {e}"))?;
            tracing::info!("Database migrations applied");
        }

        Ok(Self { pool })
    }

    /// Wait for checked-out connections to return, then close the pool
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}

#[async_trait]
impl InventoryStore for PgStore {
    async fn server_version(&self) -> StoreResult<String> {
        let version: String = sqlx::query_scalar("SELECT version()")
            .fetch_one(&self.pool)
            .await?;
        Ok(version)
    }

    async fn create_product(&self, data: &ProductCreate) -> StoreResult<Product> {
        products::create(&self.pool, data).await
    }

    async fn create_stock(&self, data: &StockCreate) -> StoreResult<Stock> {
        stocks::create(&self.pool, data).await
    }

    async fn apply_stock_change(&self, change: &StockChange) -> StoreResult<StockMutation> {
        stocks::apply_change(&self.pool, change).await
    }

    async fn find_products(&self, filter: &ProductFilter) -> StoreResult<Vec<Product>> {
        products::find(&self.pool, filter).await
    }

    async fn find_stocks(&self, filter: &StockFilter) -> StoreResult<Vec<StockView>> {
        stocks::find(&self.pool, filter).await
    }

    async fn find_history(
        &self,
        filter: &HistoryFilter,
        page: PageRequest,
    ) -> StoreResult<Paginated<HistoryView>> {
        history::find(&self.pool, filter, page).await
    }
}
