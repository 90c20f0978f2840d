//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Conversion, CurrencyCode, RateEntry};

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to convert an amount between two currencies.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversionRequest {
    /// Amount in the source currency. Must be greater than zero.
    #[schema(value_type = f64, example = 100.0)]
    pub amount: Decimal,
    /// Source currency code
    pub from: CurrencyCode,
    /// Target currency code
    pub to: CurrencyCode,
}

/// Response after a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversionResponse {
    #[schema(value_type = f64, example = 100.0)]
    pub amount: Decimal,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    /// Rate applied (units of `to` per one `from`)
    #[schema(value_type = f64, example = 1.0872)]
    pub rate: Decimal,
    /// Unrounded converted amount
    #[schema(value_type = f64, example = 108.72)]
    pub converted_amount: Decimal,
}

impl From<Conversion> for ConversionResponse {
    fn from(c: Conversion) -> Self {
        Self {
            amount: c.amount,
            from: c.from,
            to: c.to,
            rate: c.rate,
            converted_amount: c.converted_amount,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Historical rates DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request for a paginated slice of a historical rate series.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoricalRatesRequest {
    /// Base currency for the series
    pub base: CurrencyCode,
    /// First date of the range (inclusive)
    #[schema(value_type = String, example = "2024-01-01")]
    pub start_date: NaiveDate,
    /// Last date of the range (inclusive)
    #[schema(value_type = String, example = "2024-01-31")]
    pub end_date: NaiveDate,
    /// 1-based page number
    #[serde(default = "default_page")]
    #[schema(example = 1)]
    pub page: i64,
    /// Entries per page
    #[serde(default = "default_page_size")]
    #[schema(example = 10)]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

/// Pagination metadata accompanying a historical rates page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    /// The page that was returned (1-based)
    #[schema(example = 1)]
    pub page: i64,
    /// Requested page size
    #[schema(example = 10)]
    pub page_size: i64,
    /// Total entries in the full series
    #[schema(example = 31)]
    pub total_entries: u64,
}

/// One page of a historical rate series, earliest date first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoricalRatesResponse {
    pub base: CurrencyCode,
    /// Entries for the requested page, ascending by date
    pub rates: Vec<RateEntry>,
    pub pagination: PaginationMeta,
}
