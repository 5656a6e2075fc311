//! Dynamic WHERE clause builder
//!
//! Filters are lowered to a list of [`Predicate`]s and pushed onto a
//! `sqlx::QueryBuilder`. Column names only ever come from this module; every
//! user value is a bind parameter.

use chrono::{DateTime, Utc};
use sqlx::{Postgres, QueryBuilder};

use crate::store::{HistoryFilter, ProductFilter, QuantityRange, StockFilter};

/// A bindable filter value
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    BigInt(i64),
    Int(i32),
    Timestamp(DateTime<Utc>),
}

/// One optional constraint of a read query
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `column = value`
    Eq(&'static str, FilterValue),
    /// `column ILIKE '%value%'`, matched literally
    ContainsIgnoreCase(&'static str, String),
    /// `column >= value`
    AtLeast(&'static str, FilterValue),
    /// `column <= value`
    AtMost(&'static str, FilterValue),
    /// `column < value`
    Before(&'static str, FilterValue),
}

/// Escape LIKE metacharacters so the input matches literally
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn push_value(qb: &mut QueryBuilder<'_, Postgres>, value: FilterValue) {
    match value {
        FilterValue::Text(v) => qb.push_bind(v),
        FilterValue::BigInt(v) => qb.push_bind(v),
        FilterValue::Int(v) => qb.push_bind(v),
        FilterValue::Timestamp(v) => qb.push_bind(v),
    };
}

/// Append ` WHERE p1 AND p2 ...`; nothing when `predicates` is empty
pub fn push_where(qb: &mut QueryBuilder<'_, Postgres>, predicates: Vec<Predicate>) {
    for (i, predicate) in predicates.into_iter().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " });
        match predicate {
            Predicate::Eq(column, value) => {
                qb.push(column).push(" = ");
                push_value(qb, value);
            }
            Predicate::ContainsIgnoreCase(column, needle) => {
                qb.push(column)
                    .push(" ILIKE ")
                    .push_bind(format!("%{}%", escape_like(&needle)))
                    .push(" ESCAPE '\\'");
            }
            Predicate::AtLeast(column, value) => {
                qb.push(column).push(" >= ");
                push_value(qb, value);
            }
            Predicate::AtMost(column, value) => {
                qb.push(column).push(" <= ");
                push_value(qb, value);
            }
            Predicate::Before(column, value) => {
                qb.push(column).push(" < ");
                push_value(qb, value);
            }
        }
    }
}

fn range(predicates: &mut Vec<Predicate>, column: &'static str, range: QuantityRange) {
    if let Some(min) = range.min {
        predicates.push(Predicate::AtLeast(column, FilterValue::Int(min)));
    }
    if let Some(max) = range.max {
        predicates.push(Predicate::AtMost(column, FilterValue::Int(max)));
    }
}

pub fn product_predicates(filter: &ProductFilter) -> Vec<Predicate> {
    let mut predicates = Vec::new();
    if let Some(name) = &filter.product_name {
        predicates.push(Predicate::ContainsIgnoreCase("product_name", name.clone()));
    }
    if let Some(plu) = &filter.product_plu {
        predicates.push(Predicate::Eq("product_plu", FilterValue::Text(plu.clone())));
    }
    predicates
}

/// Predicates over `stocks st JOIN products p JOIN shops s`
pub fn stock_predicates(filter: &StockFilter) -> Vec<Predicate> {
    let mut predicates = Vec::new();
    if let Some(plu) = &filter.product_plu {
        predicates.push(Predicate::Eq("p.product_plu", FilterValue::Text(plu.clone())));
    }
    if let Some(shop_id) = filter.shop_id {
        predicates.push(Predicate::Eq("st.shop_id", FilterValue::BigInt(shop_id)));
    }
    range(&mut predicates, "st.stock_quantity", filter.quantity);
    range(&mut predicates, "st.stock_order", filter.order);
    predicates
}

/// Predicates over `history h JOIN products p JOIN shops s`
pub fn history_predicates(filter: &HistoryFilter) -> Vec<Predicate> {
    let mut predicates = Vec::new();
    if let Some(shop_id) = filter.shop_id {
        predicates.push(Predicate::Eq("h.shop_id", FilterValue::BigInt(shop_id)));
    }
    if let Some(plu) = &filter.plu {
        predicates.push(Predicate::ContainsIgnoreCase("p.product_plu", plu.clone()));
    }
    if let Some(name) = &filter.product_name {
        predicates.push(Predicate::ContainsIgnoreCase("p.product_name", name.clone()));
    }
    if let Some(name) = &filter.shop_name {
        predicates.push(Predicate::ContainsIgnoreCase("s.shop_name", name.clone()));
    }
    let (from, until) = filter.date_window();
    if let Some(from) = from {
        predicates.push(Predicate::AtLeast("h.action_date", FilterValue::Timestamp(from)));
    }
    if let Some(until) = until {
        predicates.push(Predicate::Before("h.action_date", FilterValue::Timestamp(until)));
    }
    if let Some(action) = filter.action {
        predicates.push(Predicate::Eq(
            "h.action",
            FilterValue::Text(action.as_str().to_string()),
        ));
    }
    predicates
}
