//! # FX Types
//!
//! Domain types and port traits for the FX rates service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, ExchangeRate, RateSeries)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Conversion, CurrencyCode, ExchangeRate, RateEntry, RateSeries};
pub use dto::*;
pub use error::{AppError, PolicyError, ProviderError};
pub use ports::RateSource;
