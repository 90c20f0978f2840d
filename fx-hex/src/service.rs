//! FX Application Service
//!
//! Orchestrates the three supported queries through the rate source port.
//! Contains NO infrastructure logic - pure business orchestration.

use fx_types::{
    AppError, Conversion, ConversionRequest, CurrencyCode, ExchangeRate, HistoricalRatesRequest,
    HistoricalRatesResponse, PaginationMeta, RateSource,
};

use crate::{pagination, policy};

/// Application service for rate lookups and conversions.
///
/// Generic over `S: RateSource` - the adapter is injected at compile time.
/// This enables:
/// - Swapping rate providers without code changes
/// - Testing with a mock source
/// - Compile-time checks for port implementation
///
/// Stateless end to end: every call validates, fetches, transforms, and
/// returns, with nothing shared between requests.
pub struct ConverterService<S: RateSource> {
    source: S,
}

impl<S: RateSource> ConverterService<S> {
    /// Creates a new converter service with the given rate source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns a reference to the underlying rate source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches the latest rate snapshot for a base currency, unmodified.
    pub async fn latest_rates(&self, base: &CurrencyCode) -> Result<ExchangeRate, AppError> {
        self.source.fetch_latest(base).await.map_err(Into::into)
    }

    /// Converts an amount between two currencies at the latest rate.
    ///
    /// Validation runs strictly before the fetch; any failure short-circuits
    /// without further work.
    pub async fn convert(&self, request: ConversionRequest) -> Result<Conversion, AppError> {
        policy::validate(&request)?;

        let table = self.source.fetch_latest(&request.from).await?;

        policy::convert(&request, &table).map_err(Into::into)
    }

    /// Returns one page of the historical rate series for a base currency.
    pub async fn historical_rates(
        &self,
        request: HistoricalRatesRequest,
    ) -> Result<HistoricalRatesResponse, AppError> {
        // Fail fast on bad pagination before any network IO.
        pagination::validate(request.page, request.page_size)?;

        let series = self
            .source
            .fetch_range(&request.base, request.start_date, request.end_date)
            .await?;

        let page = pagination::paginate(&series, request.page, request.page_size)?;

        Ok(HistoricalRatesResponse {
            base: request.base,
            rates: page.entries,
            pagination: PaginationMeta {
                page: request.page,
                page_size: request.page_size,
                total_entries: page.total as u64,
            },
        })
    }
}
