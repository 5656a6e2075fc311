//! In-memory `InventoryStore` for tests
//!
//! Mirrors the PostgreSQL store's observable behavior: constraint errors,
//! filter matching, ordering and all-or-nothing mutations.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::models::{
    HistoryRecord, HistoryView, Product, ProductCreate, Shop, Stock, StockChange, StockCreate,
    StockDirection, StockView,
};
use shared::{PageRequest, Paginated};

use super::{HistoryFilter, InventoryStore, ProductFilter, StockFilter, StockMutation};
use crate::error::{StoreError, StoreResult};

#[derive(Default)]
struct Tables {
    products: Vec<Product>,
    shops: Vec<Shop>,
    stocks: Vec<Stock>,
    history: Vec<HistoryRecord>,
}

pub struct MemoryStore {
    tables: Mutex<Tables>,
    fail_history_insert: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Empty store seeded with the same shops as the initial migration
    pub fn new() -> Self {
        let shops = ["Central Store", "North Branch", "South Branch"]
            .into_iter()
            .enumerate()
            .map(|(i, name)| Shop {
                shop_id: i as i64 + 1,
                shop_name: name.to_string(),
            })
            .collect();
        Self {
            tables: Mutex::new(Tables {
                shops,
                ..Tables::default()
            }),
            fail_history_insert: AtomicBool::new(false),
        }
    }

    /// Make the next history inserts fail, as a broken audit table would
    pub fn fail_history_inserts(&self, fail: bool) {
        self.fail_history_insert.store(fail, Ordering::SeqCst);
    }

    pub fn stock(&self, product_id: i64, shop_id: i64) -> Option<Stock> {
        self.lock()
            .stocks
            .iter()
            .find(|s| s.product_id == product_id && s.shop_id == shop_id)
            .cloned()
    }

    pub fn history_len(&self) -> usize {
        self.lock().history.len()
    }

    /// Rewrite a history timestamp so date filters can be exercised
    pub fn set_action_date(&self, history_id: i64, at: DateTime<Utc>) {
        let mut tables = self.lock();
        if let Some(h) = tables.history.iter_mut().find(|h| h.history_id == history_id) {
            h.action_date = at;
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|p| p.into_inner())
    }
}

fn contains_ignore_case(haystack: &str, needle: &Option<String>) -> bool {
    needle
        .as_ref()
        .is_none_or(|n| haystack.to_lowercase().contains(&n.to_lowercase()))
}

fn equals<T: PartialEq>(value: &T, wanted: &Option<T>) -> bool {
    wanted.as_ref().is_none_or(|w| w == value)
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn server_version(&self) -> StoreResult<String> {
        Ok("memory".to_string())
    }

    async fn create_product(&self, data: &ProductCreate) -> StoreResult<Product> {
        let mut tables = self.lock();
        if tables.products.iter().any(|p| p.product_plu == data.product_plu) {
            return Err(StoreError::DuplicatePlu(data.product_plu.clone()));
        }
        let product = Product {
            product_id: tables.products.len() as i64 + 1,
            product_plu: data.product_plu.clone(),
            product_name: data.product_name.clone(),
        };
        tables.products.push(product.clone());
        Ok(product)
    }

    async fn create_stock(&self, data: &StockCreate) -> StoreResult<Stock> {
        let mut tables = self.lock();
        if !tables.products.iter().any(|p| p.product_id == data.product_id) {
            return Err(StoreError::MissingProduct(data.product_id));
        }
        if !tables.shops.iter().any(|s| s.shop_id == data.shop_id) {
            return Err(StoreError::MissingShop(data.shop_id));
        }
        if tables
            .stocks
            .iter()
            .any(|s| s.product_id == data.product_id && s.shop_id == data.shop_id)
        {
            return Err(StoreError::DuplicateStock {
                product_id: data.product_id,
                shop_id: data.shop_id,
            });
        }
        let stock = Stock {
            stock_id: tables.stocks.len() as i64 + 1,
            product_id: data.product_id,
            shop_id: data.shop_id,
            stock_quantity: data.stock_quantity,
            stock_order: data.stock_order,
        };
        tables.stocks.push(stock.clone());
        Ok(stock)
    }

    async fn apply_stock_change(&self, change: &StockChange) -> StoreResult<StockMutation> {
        let mut tables = self.lock();
        let next_history_id = tables.history.len() as i64 + 1;

        let stock = tables
            .stocks
            .iter_mut()
            .find(|s| s.product_id == change.product_id && s.shop_id == change.shop_id)
            .ok_or(StoreError::StockNotFound {
                product_id: change.product_id,
                shop_id: change.shop_id,
            })?;

        let before = stock.stock_quantity;
        let after = change.apply_to(before).ok_or(match change.direction {
            StockDirection::Decrease => StoreError::InsufficientStock {
                available: before,
                requested: change.amount,
            },
            StockDirection::Increase => StoreError::QuantityOutOfRange,
        })?;

        // Checked before writing so a failed insert leaves the row untouched
        if self.fail_history_insert.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::Protocol(
                "history insert failed".into(),
            )));
        }

        stock.stock_quantity = after;
        let stock = stock.clone();
        let history = HistoryRecord {
            history_id: next_history_id,
            product_id: change.product_id,
            shop_id: change.shop_id,
            action: change.action,
            quantity_actions: change.amount,
            quantity_before: before,
            quantity_after: after,
            action_date: Utc::now(),
        };
        tables.history.push(history.clone());

        Ok(StockMutation { stock, history })
    }

    async fn find_products(&self, filter: &ProductFilter) -> StoreResult<Vec<Product>> {
        let tables = self.lock();
        let mut products: Vec<Product> = tables
            .products
            .iter()
            .filter(|p| contains_ignore_case(&p.product_name, &filter.product_name))
            .filter(|p| equals(&p.product_plu, &filter.product_plu))
            .cloned()
            .collect();
        products.sort_by_key(|p| p.product_id);
        Ok(products)
    }

    async fn find_stocks(&self, filter: &StockFilter) -> StoreResult<Vec<StockView>> {
        let tables = self.lock();
        let mut views: Vec<StockView> = tables
            .stocks
            .iter()
            .filter_map(|s| {
                let product = tables.products.iter().find(|p| p.product_id == s.product_id)?;
                let shop = tables.shops.iter().find(|sh| sh.shop_id == s.shop_id)?;
                Some(StockView {
                    stock_id: s.stock_id,
                    product_id: s.product_id,
                    product_plu: product.product_plu.clone(),
                    product_name: product.product_name.clone(),
                    shop_id: s.shop_id,
                    shop_name: shop.shop_name.clone(),
                    stock_quantity: s.stock_quantity,
                    stock_order: s.stock_order,
                })
            })
            .filter(|v| equals(&v.product_plu, &filter.product_plu))
            .filter(|v| equals(&v.shop_id, &filter.shop_id))
            .filter(|v| filter.quantity.contains(v.stock_quantity))
            .filter(|v| filter.order.contains(v.stock_order))
            .collect();
        views.sort_by_key(|v| (v.product_id, v.shop_id));
        Ok(views)
    }

    async fn find_history(
        &self,
        filter: &HistoryFilter,
        page: PageRequest,
    ) -> StoreResult<Paginated<HistoryView>> {
        let tables = self.lock();
        let (from, until) = filter.date_window();

        let mut views: Vec<HistoryView> = tables
            .history
            .iter()
            .filter_map(|h| {
                let product = tables.products.iter().find(|p| p.product_id == h.product_id)?;
                let shop = tables.shops.iter().find(|s| s.shop_id == h.shop_id)?;
                Some(HistoryView {
                    history_id: h.history_id,
                    product_id: h.product_id,
                    shop_id: h.shop_id,
                    action: h.action,
                    quantity_actions: h.quantity_actions,
                    quantity_before: h.quantity_before,
                    quantity_after: h.quantity_after,
                    action_date: h.action_date,
                    product_plu: product.product_plu.clone(),
                    product_name: product.product_name.clone(),
                    shop_name: shop.shop_name.clone(),
                })
            })
            .filter(|v| equals(&v.shop_id, &filter.shop_id))
            .filter(|v| equals(&v.action, &filter.action))
            .filter(|v| contains_ignore_case(&v.product_plu, &filter.plu))
            .filter(|v| contains_ignore_case(&v.product_name, &filter.product_name))
            .filter(|v| contains_ignore_case(&v.shop_name, &filter.shop_name))
            .filter(|v| from.is_none_or(|f| v.action_date >= f))
            .filter(|v| until.is_none_or(|u| v.action_date < u))
            .collect();
        views.sort_by(|a, b| {
            b.action_date
                .cmp(&a.action_date)
                .then(b.history_id.cmp(&a.history_id))
        });

        let total = views.len() as u64;
        let data = views
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .collect();
        Ok(Paginated::new(data, total, page))
    }
}
