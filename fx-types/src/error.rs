//! Error types for the FX rates service.

use crate::domain::CurrencyCode;

/// Policy-level errors (business rule violations).
///
/// These are all local decisions: none of them is retryable and none of them
/// involves IO.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PolicyError {
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    // Fixed contract text: always the whole exclusion list, regardless of
    // which side of the pair triggered the rejection.
    #[error("Currency conversion not supported for TRY, PLN, THB, and MXN.")]
    UnsupportedCurrency,

    #[error("Page and page size must be positive")]
    InvalidPagination,

    #[error("No exchange rate available for {0}")]
    RateUnavailable(CurrencyCode),

    #[error("Invalid currency code: {0}")]
    InvalidCurrencyCode(String),
}

/// Provider-level errors (rate source failures).
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Http(String),

    #[error("Provider returned status {0}")]
    Status(u16),

    #[error("Malformed provider payload: {0}")]
    Payload(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes. The distinction between bad input
/// (400/404) and upstream failure (502) is preserved end to end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream failure: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PolicyError> for AppError {
    fn from(err: PolicyError) -> Self {
        match err {
            // Consistently 404: the request was well-formed, the provider
            // simply has no rate for that target currency.
            PolicyError::RateUnavailable(_) => AppError::NotFound(err.to_string()),
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(_err: ProviderError) -> Self {
        // Transport details never reach the client.
        AppError::Upstream("Exchange rate data is currently unavailable".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusion_message_is_fixed() {
        assert_eq!(
            PolicyError::UnsupportedCurrency.to_string(),
            "Currency conversion not supported for TRY, PLN, THB, and MXN."
        );
    }

    #[test]
    fn test_rate_unavailable_maps_to_not_found() {
        let err = PolicyError::RateUnavailable(CurrencyCode::new("JPY").unwrap());
        assert!(matches!(AppError::from(err), AppError::NotFound(_)));
    }

    #[test]
    fn test_policy_errors_map_to_bad_request() {
        assert!(matches!(
            AppError::from(PolicyError::InvalidAmount),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            AppError::from(PolicyError::InvalidPagination),
            AppError::BadRequest(_)
        ));
    }

    #[test]
    fn test_provider_errors_do_not_leak_transport_detail() {
        let err = ProviderError::Http("connection refused to 10.0.0.7:443".into());
        match AppError::from(err) {
            AppError::Upstream(msg) => assert!(!msg.contains("10.0.0.7")),
            other => panic!("expected Upstream, got {other:?}"),
        }
    }
}
