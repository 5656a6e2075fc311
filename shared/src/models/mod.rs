//! Data models
//!
//! Shared between stock-server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (PostgreSQL BIGSERIAL).

pub mod history;
pub mod product;
pub mod shop;
pub mod stock;

// Re-exports
pub use history::*;
pub use product::*;
pub use shop::*;
pub use stock::*;
