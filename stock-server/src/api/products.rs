//! Product endpoints

use axum::Json;
use axum::extract::State;
use http::StatusCode;
use serde::Deserialize;
use shared::error::AppResult;
use shared::models::{PLU_MAX_LEN, PRODUCT_NAME_MAX_LEN, Product};
use validator::Validate;

use super::extract::{QueryParams, ValidJson};
use super::params;
use crate::services::catalog;
use crate::state::AppState;
use crate::store::ProductFilter;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = PLU_MAX_LEN))]
    pub product_plu: String,
    #[validate(length(min = 1, max = PRODUCT_NAME_MAX_LEN))]
    pub product_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub product_name: Option<String>,
    pub product_plu: Option<String>,
}

impl From<ProductQuery> for ProductFilter {
    fn from(q: ProductQuery) -> Self {
        Self {
            product_name: params::text(q.product_name),
            product_plu: params::text(q.product_plu),
        }
    }
}

/// POST /create-product
pub async fn create_product(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product =
        catalog::create_product(state.store.as_ref(), &req.product_plu, &req.product_name).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /get-products-by-filter
pub async fn list_by_filter(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ProductQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.store.find_products(&query.into()).await?;
    Ok(Json(products))
}
