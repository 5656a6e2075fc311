//! Shelf quantity mutations
//!
//! Validates an adjustment, resolves its history action and hands the change
//! to the store, which applies it together with its audit record.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{HistoryAction, StockChange, StockDirection};

use crate::store::{InventoryStore, StockMutation};

/// A requested shelf adjustment, before validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    pub product_id: i64,
    pub shop_id: i64,
    pub amount: i32,
    /// Defaults per direction when absent
    pub action: Option<HistoryAction>,
}

fn validate(direction: StockDirection, adjustment: Adjustment) -> AppResult<StockChange> {
    if adjustment.amount <= 0 {
        return Err(AppError::invalid_field(
            "stock_quantity",
            "stock_quantity must be greater than zero",
        ));
    }

    let action = adjustment
        .action
        .unwrap_or(HistoryAction::default_for(direction));
    if !action.permits(direction) {
        return Err(AppError::new(ErrorCode::StockActionMismatch)
            .with_detail("field", "action")
            .with_detail("action", action.as_str()));
    }

    Ok(StockChange {
        product_id: adjustment.product_id,
        shop_id: adjustment.shop_id,
        direction,
        amount: adjustment.amount,
        action,
    })
}

async fn apply(
    store: &dyn InventoryStore,
    direction: StockDirection,
    adjustment: Adjustment,
) -> AppResult<StockMutation> {
    let change = validate(direction, adjustment)?;
    let mutation = store.apply_stock_change(&change).await?;
    tracing::info!(
        product_id = change.product_id,
        shop_id = change.shop_id,
        amount = change.amount,
        action = %change.action,
        quantity_after = mutation.stock.stock_quantity,
        history_id = mutation.history.history_id,
        "Stock {}",
        match direction {
            StockDirection::Increase => "increased",
            StockDirection::Decrease => "decreased",
        }
    );
    Ok(mutation)
}

/// Add `amount` to the shelf quantity
pub async fn increase(
    store: &dyn InventoryStore,
    adjustment: Adjustment,
) -> AppResult<StockMutation> {
    apply(store, StockDirection::Increase, adjustment).await
}

/// Remove `amount` from the shelf quantity; fails without effect when short
pub async fn decrease(
    store: &dyn InventoryStore,
    adjustment: Adjustment,
) -> AppResult<StockMutation> {
    apply(store, StockDirection::Decrease, adjustment).await
}
