//! Conversion policy: eligibility rules and conversion arithmetic.
//!
//! Everything here is pure and synchronous - safe to call concurrently
//! without synchronization.

use rust_decimal::Decimal;

use fx_types::domain::{Conversion, CurrencyCode, ExchangeRate};
use fx_types::dto::ConversionRequest;
use fx_types::error::PolicyError;

/// Currencies for which conversion is disallowed, in either position of the
/// pair. Fixed at compile time; codes are stored uppercase so a normalized
/// `CurrencyCode` can be matched directly.
pub const EXCLUDED_CURRENCIES: [&str; 4] = ["TRY", "PLN", "THB", "MXN"];

fn is_excluded(code: &CurrencyCode) -> bool {
    EXCLUDED_CURRENCIES.contains(&code.as_str())
}

/// Checks a conversion request against the policy rules.
///
/// Must run before any rate fetch: a rejected request performs no IO.
pub fn validate(request: &ConversionRequest) -> Result<(), PolicyError> {
    if is_excluded(&request.from) || is_excluded(&request.to) {
        return Err(PolicyError::UnsupportedCurrency);
    }
    if request.amount <= Decimal::ZERO {
        return Err(PolicyError::InvalidAmount);
    }
    Ok(())
}

/// Computes the converted amount from a fetched rate table.
///
/// The table must have been fetched with `request.from` as its base. The
/// product is exact decimal arithmetic and is not rounded; callers round for
/// display only.
pub fn convert(
    request: &ConversionRequest,
    table: &ExchangeRate,
) -> Result<Conversion, PolicyError> {
    debug_assert_eq!(
        table.base, request.from,
        "rate table must be based on the source currency"
    );

    let rate = table
        .rate_for(&request.to)
        .ok_or_else(|| PolicyError::RateUnavailable(request.to.clone()))?;

    Ok(Conversion {
        amount: request.amount,
        from: request.from.clone(),
        to: request.to.clone(),
        rate,
        converted_amount: request.amount * rate,
    })
}
