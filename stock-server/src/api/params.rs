//! Query-string value parsing
//!
//! Browser clients send every filter field, using `""` for the unused ones,
//! so blank values are treated as absent throughout.

use std::fmt::Display;
use std::str::FromStr;

use shared::PageRequest;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::pagination::DEFAULT_LIMIT;

use crate::store::QuantityRange;

/// Trimmed text, `None` when blank
pub fn text(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse a typed value, `None` when blank
pub fn parse<T>(field: &str, raw: Option<String>) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    text(raw)
        .map(|v| {
            v.parse::<T>().map_err(|e| {
                AppError::with_message(
                    ErrorCode::InvalidFormat,
                    format!("Invalid value for {field}: {e}"),
                )
                .with_detail("field", field)
            })
        })
        .transpose()
}

/// Inclusive range from two optional bounds; `min > max` is rejected
pub fn range(
    min_field: &str,
    max_field: &str,
    min: Option<String>,
    max: Option<String>,
) -> AppResult<QuantityRange> {
    let range = QuantityRange {
        min: parse(min_field, min)?,
        max: parse(max_field, max)?,
    };
    if let (Some(lo), Some(hi)) = (range.min, range.max) {
        if lo > hi {
            return Err(AppError::invalid_field(
                min_field,
                format!("{min_field} must not exceed {max_field}"),
            ));
        }
    }
    Ok(range)
}

/// Page request with defaults; zero values are rejected, `limit` is capped
pub fn page(page: Option<String>, limit: Option<String>) -> AppResult<PageRequest> {
    let page_no = parse::<u32>("page", page)?.unwrap_or(1);
    let limit = parse::<u32>("limit", limit)?.unwrap_or(DEFAULT_LIMIT);
    PageRequest::new(page_no, limit).ok_or_else(|| {
        AppError::with_message(ErrorCode::ValueOutOfRange, "page and limit must be at least 1")
            .with_detail("field", if page_no == 0 { "page" } else { "limit" })
    })
}
