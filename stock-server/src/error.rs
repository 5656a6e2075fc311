//! Store-layer error type
//!
//! `StoreError` bridges storage failures (`sqlx::Error`) and business-rule
//! outcomes detected inside a transaction to the API-layer `AppError`.
//! It keeps `?` propagation free of `.map_err(...)` boilerplate in handlers.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};

/// Errors raised by an [`InventoryStore`](crate::store::InventoryStore)
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No stock row exists for the (product, shop) pair
    #[error("stock not found for product {product_id} in shop {shop_id}")]
    StockNotFound { product_id: i64, shop_id: i64 },

    /// Decrease would take the shelf quantity below zero
    #[error("insufficient stock: {available} available, {requested} requested")]
    InsufficientStock { available: i32, requested: i32 },

    /// Increase would overflow the stored quantity
    #[error("stock quantity out of range")]
    QuantityOutOfRange,

    /// A product with this PLU already exists
    #[error("product with PLU {0:?} already exists")]
    DuplicatePlu(String),

    /// A stock row for the pair already exists
    #[error("stock already exists for product {product_id} in shop {shop_id}")]
    DuplicateStock { product_id: i64, shop_id: i64 },

    /// Referenced product does not exist
    #[error("product {0} does not exist")]
    MissingProduct(i64),

    /// Referenced shop does not exist
    #[error("shop {0} does not exist")]
    MissingShop(i64),

    /// Connectivity or unexpected database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// PostgreSQL SQLSTATE of the underlying database error, if any
    pub fn sqlstate(err: &sqlx::Error) -> Option<String> {
        match err {
            sqlx::Error::Database(db) => db.code().map(|c| c.into_owned()),
            _ => None,
        }
    }

    /// Name of the violated constraint, if the database reported one
    pub fn constraint(err: &sqlx::Error) -> Option<&str> {
        match err {
            sqlx::Error::Database(db) => db.constraint(),
            _ => None,
        }
    }
}

/// SQLSTATE: unique_violation
pub const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE: foreign_key_violation
pub const FOREIGN_KEY_VIOLATION: &str = "23503";
/// SQLSTATE: check_violation
pub const CHECK_VIOLATION: &str = "23514";
/// SQLSTATE: numeric_value_out_of_range
pub const NUMERIC_OUT_OF_RANGE: &str = "22003";

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::StockNotFound {
                product_id,
                shop_id,
            } => AppError::new(ErrorCode::StockNotFound)
                .with_detail("product_id", product_id)
                .with_detail("shop_id", shop_id),
            StoreError::InsufficientStock {
                available,
                requested,
            } => AppError::insufficient_stock(available, requested),
            StoreError::QuantityOutOfRange => AppError::new(ErrorCode::ValueOutOfRange)
                .with_detail("field", "stock_quantity"),
            StoreError::DuplicatePlu(plu) => {
                AppError::new(ErrorCode::ProductPluExists).with_detail("product_plu", plu)
            }
            StoreError::DuplicateStock {
                product_id,
                shop_id,
            } => AppError::new(ErrorCode::StockAlreadyExists)
                .with_detail("product_id", product_id)
                .with_detail("shop_id", shop_id),
            StoreError::MissingProduct(product_id) => {
                AppError::new(ErrorCode::ProductNotFound).with_detail("product_id", product_id)
            }
            StoreError::MissingShop(shop_id) => {
                AppError::new(ErrorCode::ShopNotFound).with_detail("shop_id", shop_id)
            }
            StoreError::Database(db_err) => {
                tracing::error!(error = %db_err, "Store database error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for store-layer results
pub type StoreResult<T> = Result<T, StoreError>;
