//! # FX Hex
//!
//! Application service layer and HTTP adapter for the FX rates service.
//!
//! ## Architecture
//!
//! - `policy` - Pure conversion eligibility rules and arithmetic
//! - `pagination` - Pure slicing of historical rate series
//! - `service` - Application service (orchestrates fetch + transform)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `S: RateSource`, allowing
//! different rate providers to be injected.

pub mod inbound;
pub mod pagination;
pub mod policy;
pub mod service;

mod openapi;


pub use service::ConverterService;
