//! Shared types for the stock ledger
//!
//! Types used by the server and its clients: error codes and the error
//! envelope, inventory models, and pagination.

pub mod error;
pub mod models;
pub mod pagination;

// Re-exports
pub use axum::Json;
pub use serde::{Deserialize, Serialize};

pub use pagination::{PageMeta, PageRequest, Paginated};
