//! Product and stock-row creation

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    PLU_MAX_LEN, PRODUCT_NAME_MAX_LEN, Product, ProductCreate, Stock, StockCreate,
};

use crate::store::InventoryStore;

fn required_text(field: &str, value: &str, max_len: u64) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(
            AppError::with_message(ErrorCode::RequiredField, format!("{field} is required"))
                .with_detail("field", field),
        );
    }
    if value.chars().count() as u64 > max_len {
        return Err(AppError::invalid_field(
            field,
            format!("{field} must be at most {max_len} characters"),
        ));
    }
    Ok(value.to_string())
}

/// Create a product from untrimmed input
pub async fn create_product(
    store: &dyn InventoryStore,
    product_plu: &str,
    product_name: &str,
) -> AppResult<Product> {
    let data = ProductCreate {
        product_plu: required_text("product_plu", product_plu, PLU_MAX_LEN)?,
        product_name: required_text("product_name", product_name, PRODUCT_NAME_MAX_LEN)?,
    };
    let product = store.create_product(&data).await?;
    tracing::info!(
        product_id = product.product_id,
        product_plu = %product.product_plu,
        "Product created"
    );
    Ok(product)
}

/// Create the stock row for a (product, shop) pair; initial values default to 0
pub async fn create_stock(
    store: &dyn InventoryStore,
    product_id: i64,
    shop_id: i64,
    stock_quantity: Option<i32>,
    stock_order: Option<i32>,
) -> AppResult<Stock> {
    let stock_quantity = stock_quantity.unwrap_or(0);
    let stock_order = stock_order.unwrap_or(0);
    if stock_quantity < 0 {
        return Err(AppError::invalid_field(
            "stock_quantity",
            "stock_quantity must not be negative",
        ));
    }
    if stock_order < 0 {
        return Err(AppError::invalid_field(
            "stock_order",
            "stock_order must not be negative",
        ));
    }

    let stock = store
        .create_stock(&StockCreate {
            product_id,
            shop_id,
            stock_quantity,
            stock_order,
        })
        .await?;
    tracing::info!(
        stock_id = stock.stock_id,
        product_id,
        shop_id,
        stock_quantity,
        "Stock row created"
    );
    Ok(stock)
}
