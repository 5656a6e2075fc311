//! Stock queries and the transactional shelf mutation

use shared::models::{HistoryCreate, Stock, StockChange, StockCreate, StockDirection, StockView};
use sqlx::{PgPool, QueryBuilder};

use super::filter::{push_where, stock_predicates};
use super::history;
use crate::error::{
    CHECK_VIOLATION, FOREIGN_KEY_VIOLATION, NUMERIC_OUT_OF_RANGE, StoreError, StoreResult,
    UNIQUE_VIOLATION,
};
use crate::store::{StockFilter, StockMutation};

const COLUMNS: &str = "stock_id, product_id, shop_id, stock_quantity, stock_order";

// Foreign key names declared in 0001_inventory_schema.sql
const PRODUCT_FKEY: &str = "stocks_product_id_fkey";
const SHOP_FKEY: &str = "stocks_shop_id_fkey";

pub async fn create(pool: &PgPool, data: &StockCreate) -> StoreResult<Stock> {
    sqlx::query_as::<_, Stock>(&format!(
        "INSERT INTO stocks (product_id, shop_id, stock_quantity, stock_order) \
         VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
    ))
    .bind(data.product_id)
    .bind(data.shop_id)
    .bind(data.stock_quantity)
    .bind(data.stock_order)
    .fetch_one(pool)
    .await
    .map_err(|e| match StoreError::sqlstate(&e).as_deref() {
        Some(UNIQUE_VIOLATION) => StoreError::DuplicateStock {
            product_id: data.product_id,
            shop_id: data.shop_id,
        },
        Some(FOREIGN_KEY_VIOLATION) => match StoreError::constraint(&e) {
            Some(PRODUCT_FKEY) => StoreError::MissingProduct(data.product_id),
            Some(SHOP_FKEY) => StoreError::MissingShop(data.shop_id),
            _ => e.into(),
        },
        Some(CHECK_VIOLATION) => StoreError::QuantityOutOfRange,
        _ => e.into(),
    })
}

/// Apply a shelf change and record it in one transaction.
///
/// The row is locked with `FOR UPDATE`, so concurrent changes to the same
/// pair serialize. The UPDATE is still guarded by `stock_quantity + delta >= 0`
/// and must affect exactly one row.
pub async fn apply_change(pool: &PgPool, change: &StockChange) -> StoreResult<StockMutation> {
    let mut tx = pool.begin().await?;

    let current: Stock = sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM stocks WHERE product_id = $1 AND shop_id = $2 FOR UPDATE"
    ))
    .bind(change.product_id)
    .bind(change.shop_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(StoreError::StockNotFound {
        product_id: change.product_id,
        shop_id: change.shop_id,
    })?;

    let insufficient = StoreError::InsufficientStock {
        available: current.stock_quantity,
        requested: change.amount,
    };
    if change.apply_to(current.stock_quantity).is_none() {
        return Err(match change.direction {
            StockDirection::Decrease => insufficient,
            StockDirection::Increase => StoreError::QuantityOutOfRange,
        });
    }

    let stock: Stock = sqlx::query_as(&format!(
        "UPDATE stocks SET stock_quantity = stock_quantity + $1 \
         WHERE stock_id = $2 AND stock_quantity + $1 >= 0 RETURNING {COLUMNS}"
    ))
    .bind(change.delta())
    .bind(current.stock_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| match StoreError::sqlstate(&e).as_deref() {
        Some(NUMERIC_OUT_OF_RANGE) | Some(CHECK_VIOLATION) => StoreError::QuantityOutOfRange,
        _ => e.into(),
    })?
    .ok_or(insufficient)?;

    let history = history::record(
        &mut *tx,
        &HistoryCreate {
            product_id: change.product_id,
            shop_id: change.shop_id,
            action: change.action,
            quantity_actions: change.amount,
            quantity_before: current.stock_quantity,
            quantity_after: stock.stock_quantity,
        },
    )
    .await?;

    tx.commit().await?;
    Ok(StockMutation { stock, history })
}

pub async fn find(pool: &PgPool, filter: &StockFilter) -> StoreResult<Vec<StockView>> {
    let mut qb = QueryBuilder::new(
        "SELECT st.stock_id, st.product_id, p.product_plu, p.product_name, \
         st.shop_id, s.shop_name, st.stock_quantity, st.stock_order \
         FROM stocks st \
         JOIN products p ON p.product_id = st.product_id \
         JOIN shops s ON s.shop_id = st.shop_id",
    );
    push_where(&mut qb, stock_predicates(filter));
    qb.push(" ORDER BY st.product_id, st.shop_id");
    Ok(qb.build_query_as::<StockView>().fetch_all(pool).await?)
}
