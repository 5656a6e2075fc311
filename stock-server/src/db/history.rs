//! History (audit trail) queries
//!
//! Records are only ever inserted, on the transaction of the stock change
//! they describe.

use shared::models::{HistoryCreate, HistoryRecord, HistoryView};
use shared::{PageRequest, Paginated};
use sqlx::{PgConnection, PgPool, QueryBuilder};

use super::filter::{history_predicates, push_where};
use crate::error::StoreResult;
use crate::store::HistoryFilter;

const FROM_JOINED: &str = " FROM history h \
     JOIN products p ON p.product_id = h.product_id \
     JOIN shops s ON s.shop_id = h.shop_id";

/// Append one history record
pub async fn record(
    conn: &mut PgConnection,
    data: &HistoryCreate,
) -> Result<HistoryRecord, sqlx::Error> {
    sqlx::query_as::<_, HistoryRecord>(
        "INSERT INTO history \
         (product_id, shop_id, action, quantity_actions, quantity_before, quantity_after) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING history_id, product_id, shop_id, action, quantity_actions, \
         quantity_before, quantity_after, action_date",
    )
    .bind(data.product_id)
    .bind(data.shop_id)
    .bind(data.action.as_str())
    .bind(data.quantity_actions)
    .bind(data.quantity_before)
    .bind(data.quantity_after)
    .fetch_one(conn)
    .await
}

/// Filtered page of history, newest first, plus the total match count
pub async fn find(
    pool: &PgPool,
    filter: &HistoryFilter,
    page: PageRequest,
) -> StoreResult<Paginated<HistoryView>> {
    let mut count = QueryBuilder::new(format!("SELECT COUNT(*){FROM_JOINED}"));
    push_where(&mut count, history_predicates(filter));
    let total: i64 = count.build_query_scalar().fetch_one(pool).await?;

    let mut qb = QueryBuilder::new(format!(
        "SELECT h.history_id, h.product_id, h.shop_id, h.action, h.quantity_actions, \
         h.quantity_before, h.quantity_after, h.action_date, \
         p.product_plu, p.product_name, s.shop_name{FROM_JOINED}"
    ));
    push_where(&mut qb, history_predicates(filter));
    qb.push(" ORDER BY h.action_date DESC, h.history_id DESC LIMIT ")
        .push_bind(i64::from(page.limit))
        .push(" OFFSET ")
        .push_bind(page.offset());
    let rows = qb.build_query_as::<HistoryView>().fetch_all(pool).await?;

    Ok(Paginated::new(rows, total.max(0) as u64, page))
}
