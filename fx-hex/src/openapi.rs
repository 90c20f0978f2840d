//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use fx_types::domain::{Conversion, CurrencyCode, ExchangeRate, RateEntry};
use fx_types::dto::{
    ConversionRequest, ConversionResponse, HistoricalRatesResponse, PaginationMeta,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Latest rate snapshot for a base currency
#[utoipa::path(
    get,
    path = "/api/rates/latest/{base}",
    tag = "rates",
    params(
        ("base" = String, Path, description = "3-letter base currency code", example = "EUR")
    ),
    responses(
        (status = 200, description = "Latest rates", body = ExchangeRate),
        (status = 400, description = "Malformed currency code"),
        (status = 502, description = "Rate provider unavailable")
    )
)]
async fn latest_rates() {}

/// Convert an amount between two currencies
#[utoipa::path(
    post,
    path = "/api/rates/convert",
    tag = "rates",
    request_body = ConversionRequest,
    responses(
        (status = 200, description = "Conversion result", body = ConversionResponse),
        (status = 400, description = "Invalid amount or excluded currency"),
        (status = 404, description = "No rate for the target currency"),
        (status = 502, description = "Rate provider unavailable")
    )
)]
async fn convert() {}

/// Paginated historical rates for a base currency
#[utoipa::path(
    get,
    path = "/api/rates/history",
    tag = "rates",
    params(
        ("base" = String, Query, description = "3-letter base currency code", example = "EUR"),
        ("start_date" = String, Query, description = "Range start (inclusive)", example = "2024-01-01"),
        ("end_date" = String, Query, description = "Range end (inclusive)", example = "2024-01-31"),
        ("page" = i64, Query, description = "1-based page number"),
        ("page_size" = i64, Query, description = "Entries per page")
    ),
    responses(
        (status = 200, description = "One page of the series", body = HistoricalRatesResponse),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 502, description = "Rate provider unavailable")
    )
)]
async fn historical_rates() {}

/// OpenAPI documentation for the FX Rates API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "FX Rates Service API",
        version = "1.0.0",
        description = "Currency exchange rate lookup and conversion backed by the Frankfurter API.",
        license(name = "MIT"),
    ),
    paths(
        health,
        latest_rates,
        convert,
        historical_rates,
    ),
    components(
        schemas(
            CurrencyCode,
            ExchangeRate,
            RateEntry,
            Conversion,
            ConversionRequest,
            ConversionResponse,
            HistoricalRatesResponse,
            PaginationMeta,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "rates", description = "Rate lookup, conversion, and history"),
    )
)]
pub struct ApiDoc;
