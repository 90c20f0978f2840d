//! Domain models for the FX rates service.

pub mod currency;
pub mod rates;

pub use currency::CurrencyCode;
pub use rates::{Conversion, ExchangeRate, RateEntry, RateSeries};
