//! Stock endpoints

use axum::Json;
use axum::extract::State;
use http::StatusCode;
use serde::Deserialize;
use shared::error::{AppError, AppResult};
use shared::models::{HistoryAction, Stock, StockView};
use validator::Validate;

use super::extract::{QueryParams, ValidJson};
use super::params;
use crate::services::{catalog, stock};
use crate::state::AppState;
use crate::store::StockFilter;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStockRequest {
    pub product_id: i64,
    pub shop_id: i64,
    #[validate(range(min = 0))]
    pub stock_quantity: Option<i32>,
    #[validate(range(min = 0))]
    pub stock_order: Option<i32>,
}

/// Body of `/increase-stock` and `/decrease-stock`
///
/// `stock_quantity` is the amount to move, not the resulting quantity.
#[derive(Debug, Deserialize, Validate)]
pub struct AdjustStockRequest {
    pub product_id: i64,
    pub shop_id: i64,
    #[validate(range(min = 1))]
    pub stock_quantity: i32,
    pub action: Option<String>,
}

impl AdjustStockRequest {
    fn into_adjustment(self) -> AppResult<stock::Adjustment> {
        let action = params::text(self.action)
            .map(|a| {
                a.parse::<HistoryAction>()
                    .map_err(|e| AppError::invalid_field("action", e.to_string()))
            })
            .transpose()?;
        Ok(stock::Adjustment {
            product_id: self.product_id,
            shop_id: self.shop_id,
            amount: self.stock_quantity,
            action,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StockQuery {
    pub product_plu: Option<String>,
    pub shop_id: Option<String>,
    pub stock_quantity_min: Option<String>,
    pub stock_quantity_max: Option<String>,
    pub stock_order_min: Option<String>,
    pub stock_order_max: Option<String>,
}

impl TryFrom<StockQuery> for StockFilter {
    type Error = AppError;

    fn try_from(q: StockQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            product_plu: params::text(q.product_plu),
            shop_id: params::parse("shop_id", q.shop_id)?,
            quantity: params::range(
                "stock_quantity_min",
                "stock_quantity_max",
                q.stock_quantity_min,
                q.stock_quantity_max,
            )?,
            order: params::range(
                "stock_order_min",
                "stock_order_max",
                q.stock_order_min,
                q.stock_order_max,
            )?,
        })
    }
}

/// POST /create-stock
pub async fn create_stock(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateStockRequest>,
) -> AppResult<(StatusCode, Json<Stock>)> {
    let stock = catalog::create_stock(
        state.store.as_ref(),
        req.product_id,
        req.shop_id,
        req.stock_quantity,
        req.stock_order,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(stock)))
}

/// PUT /increase-stock
pub async fn increase_stock(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<AdjustStockRequest>,
) -> AppResult<Json<Stock>> {
    let mutation = stock::increase(state.store.as_ref(), req.into_adjustment()?).await?;
    Ok(Json(mutation.stock))
}

/// PUT /decrease-stock
pub async fn decrease_stock(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<AdjustStockRequest>,
) -> AppResult<Json<Stock>> {
    let mutation = stock::decrease(state.store.as_ref(), req.into_adjustment()?).await?;
    Ok(Json(mutation.stock))
}

/// GET /get-stock-by-filter
pub async fn list_by_filter(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<StockQuery>,
) -> AppResult<Json<Vec<StockView>>> {
    let filter = StockFilter::try_from(query)?;
    let stocks = state.store.find_stocks(&filter).await?;
    Ok(Json(stocks))
}
