//! Product queries

use shared::models::{Product, ProductCreate};
use sqlx::{PgPool, QueryBuilder};

use super::filter::{product_predicates, push_where};
use crate::error::{StoreError, StoreResult, UNIQUE_VIOLATION};
use crate::store::ProductFilter;

const COLUMNS: &str = "product_id, product_plu, product_name";

pub async fn create(pool: &PgPool, data: &ProductCreate) -> StoreResult<Product> {
    sqlx::query_as::<_, Product>(&format!(
        "INSERT INTO products (product_plu, product_name) VALUES ($1, $2) RETURNING {COLUMNS}"
    ))
    .bind(&data.product_plu)
    .bind(&data.product_name)
    .fetch_one(pool)
    .await
    .map_err(|e| match StoreError::sqlstate(&e).as_deref() {
        Some(UNIQUE_VIOLATION) => StoreError::DuplicatePlu(data.product_plu.clone()),
        _ => e.into(),
    })
}

pub async fn find(pool: &PgPool, filter: &ProductFilter) -> StoreResult<Vec<Product>> {
    let mut qb = QueryBuilder::new(format!("SELECT {COLUMNS} FROM products"));
    push_where(&mut qb, product_predicates(filter));
    qb.push(" ORDER BY product_id");
    Ok(qb.build_query_as::<Product>().fetch_all(pool).await?)
}
