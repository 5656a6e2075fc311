//! Unified error codes for the stock ledger
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Inventory errors (products, stocks, shops)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 60xx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product PLU already exists
    ProductPluExists = 6002,

    // ==================== 66xx: Stock ====================
    /// Stock row not found for the product/shop pair
    StockNotFound = 6601,
    /// Requested amount exceeds shelf quantity
    InsufficientStock = 6602,
    /// Stock row already exists for the product/shop pair
    StockAlreadyExists = 6603,
    /// Action does not match the direction of the stock change
    StockActionMismatch = 6604,

    // ==================== 67xx: Shop ====================
    /// Shop not found
    ShopNotFound = 6701,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductPluExists => "Product PLU already exists",

            // Stock
            ErrorCode::StockNotFound => "Stock not found",
            ErrorCode::InsufficientStock => "Insufficient stock on shelf",
            ErrorCode::StockAlreadyExists => "Stock already exists for this product and shop",
            ErrorCode::StockActionMismatch => "Action is not allowed for this stock change",

            // Shop
            ErrorCode::ShopNotFound => "Shop not found",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductPluExists),

            // Stock
            6601 => Ok(ErrorCode::StockNotFound),
            6602 => Ok(ErrorCode::InsufficientStock),
            6603 => Ok(ErrorCode::StockAlreadyExists),
            6604 => Ok(ErrorCode::StockActionMismatch),

            // Shop
            6701 => Ok(ErrorCode::ShopNotFound),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
