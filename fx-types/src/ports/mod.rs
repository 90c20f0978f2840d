//! Port traits implemented by outbound adapters.

pub mod rate_source;

pub use rate_source::RateSource;
