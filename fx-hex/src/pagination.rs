//! Deterministic slicing of date-ordered rate series.

use fx_types::domain::{RateEntry, RateSeries};
use fx_types::error::PolicyError;

/// One page of a series plus the total entry count for metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Entries at offset `(page-1)*page_size`, ascending by date.
    pub entries: Vec<RateEntry>,
    /// Total entries in the full series.
    pub total: usize,
}

/// Validates pagination parameters.
///
/// Exposed separately so the orchestrator can fail fast before fetching the
/// series.
pub fn validate(page: i64, page_size: i64) -> Result<(), PolicyError> {
    if page <= 0 || page_size <= 0 {
        return Err(PolicyError::InvalidPagination);
    }
    Ok(())
}

/// Slices the requested 1-based page out of the series.
///
/// A page past the end of the series is a valid, empty result - never an
/// error - with `total` still populated.
pub fn paginate(series: &RateSeries, page: i64, page_size: i64) -> Result<Page, PolicyError> {
    validate(page, page_size)?;

    let offset = (page as usize - 1).saturating_mul(page_size as usize);
    let entries = series
        .iter()
        .skip(offset)
        .take(page_size as usize)
        .map(|(date, rates)| RateEntry {
            date: *date,
            rates: rates.clone(),
        })
        .collect();

    Ok(Page {
        entries,
        total: series.len(),
    })
}
