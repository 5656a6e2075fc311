//! Typed read filters
//!
//! Every field is optional; `None` means "no constraint". Values arrive here
//! already parsed and range-checked by the API layer.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use shared::models::HistoryAction;

/// Inclusive integer range with optional bounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuantityRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

#[cfg(test)]
impl QuantityRange {
    /// In-process counterpart of the SQL range predicates
    pub fn contains(&self, value: i32) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring of the product name
    pub product_name: Option<String>,
    /// Exact PLU
    pub product_plu: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockFilter {
    /// Exact PLU of the stocked product
    pub product_plu: Option<String>,
    pub shop_id: Option<i64>,
    pub quantity: QuantityRange,
    pub order: QuantityRange,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    pub shop_id: Option<i64>,
    /// Case-insensitive substring of the PLU
    pub plu: Option<String>,
    /// Case-insensitive substring of the product name
    pub product_name: Option<String>,
    /// Case-insensitive substring of the shop name
    pub shop_name: Option<String>,
    /// First calendar day included (UTC)
    pub start_date: Option<NaiveDate>,
    /// Last calendar day included (UTC)
    pub end_date: Option<NaiveDate>,
    pub action: Option<HistoryAction>,
}

impl HistoryFilter {
    /// Half-open `[from, until)` timestamp window covering the whole date range
    pub fn date_window(&self) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        let midnight = |d: NaiveDate| d.and_time(NaiveTime::MIN).and_utc();
        let from = self.start_date.map(midnight);
        let until = self.end_date.and_then(|d| d.succ_opt()).map(midnight);
        (from, until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_contains() {
        let open = QuantityRange::default();
        assert!(open.contains(i32::MIN));
        assert!(open.contains(i32::MAX));

        let range = QuantityRange {
            min: Some(2),
            max: Some(5),
        };
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(5));
        assert!(!range.contains(6));
    }

    #[test]
    fn test_date_window_includes_whole_end_day() {
        let filter = HistoryFilter {
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 31),
            ..Default::default()
        };
        let (from, until) = filter.date_window();
        assert_eq!(from.unwrap().to_rfc3339(), "2024-03-01T00:00:00+00:00");
        assert_eq!(until.unwrap().to_rfc3339(), "2024-04-01T00:00:00+00:00");

        assert_eq!(HistoryFilter::default().date_window(), (None, None));
    }
}
