//! Exchange rate provider port.
//!
//! This trait defines the interface for upstream rate sources.
//! Implementations can be HTTP clients, mock providers, etc.

use chrono::NaiveDate;

use crate::domain::{CurrencyCode, ExchangeRate, RateSeries};
use crate::error::ProviderError;

/// Port trait for exchange rate providers.
///
/// Implementations own their transport concerns (timeouts, cancellation);
/// the core only sees a `ProviderError` when a fetch fails and never retries
/// on its own.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync + 'static {
    /// Fetches the latest rate snapshot for the given base currency.
    async fn fetch_latest(&self, base: &CurrencyCode) -> Result<ExchangeRate, ProviderError>;

    /// Fetches the dated rate series for the base currency over the
    /// inclusive range `start..=end`, ascending by date.
    async fn fetch_range(
        &self,
        base: &CurrencyCode,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RateSeries, ProviderError>;
}
