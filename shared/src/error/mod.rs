//! Unified error system for the stock ledger
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: JSON envelope used for error bodies
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 60xx: Product errors
//! - 66xx: Stock errors
//! - 67xx: Shop errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::StockNotFound);
//!
//! let err = AppError::insufficient_stock(2, 10);
//! assert_eq!(err.code, ErrorCode::InsufficientStock);
//!
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, 6602);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
