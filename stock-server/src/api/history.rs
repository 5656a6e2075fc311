//! Stock history endpoint

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use shared::Paginated;
use shared::error::{AppError, AppResult};
use shared::models::{HistoryAction, HistoryView};

use super::extract::QueryParams;
use super::params;
use crate::state::AppState;
use crate::store::HistoryFilter;

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub shop_id: Option<String>,
    #[serde(alias = "product_plu")]
    pub plu: Option<String>,
    pub product_name: Option<String>,
    pub shop_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub action: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// GET /history
pub async fn list(
    State(state): State<AppState>,
    QueryParams(q): QueryParams<HistoryQuery>,
) -> AppResult<Json<Paginated<HistoryView>>> {
    let page = params::page(q.page, q.limit)?;
    let filter = HistoryFilter {
        shop_id: params::parse("shop_id", q.shop_id)?,
        plu: params::text(q.plu),
        product_name: params::text(q.product_name),
        shop_name: params::text(q.shop_name),
        start_date: params::parse("start_date", q.start_date)?,
        end_date: params::parse("end_date", q.end_date)?,
        action: params::parse::<HistoryAction>("action", q.action)?,
    };
    if let (Some(start), Some(end)) = (filter.start_date, filter.end_date) {
        if start > end {
            return Err(AppError::invalid_field(
                "start_date",
                "start_date must not be after end_date",
            ));
        }
    }

    let history = state.store.find_history(&filter, page).await?;
    Ok(Json(history))
}
