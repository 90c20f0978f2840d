//! # FX Frankfurter
//!
//! Outbound adapter: a reqwest client for the Frankfurter exchange rate API
//! (<https://frankfurter.dev>) implementing the `RateSource` port.
//!
//! The adapter owns its transport concerns (timeouts, TLS); the core only
//! ever sees domain types or a `ProviderError`. No retries here either -
//! a failed fetch surfaces immediately.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use fx_types::domain::{CurrencyCode, ExchangeRate, RateSeries};
use fx_types::error::ProviderError;
use fx_types::ports::RateSource;

/// Default public Frankfurter endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";

/// HTTP client for the Frankfurter API.
pub struct FrankfurterClient {
    http: reqwest::Client,
    base_url: String,
}

impl FrankfurterClient {
    /// Creates a client against the given endpoint with a 10s timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self::with_client(http, base_url)
    }

    /// Creates a client reusing an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<T, ProviderError> {
        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::warn!(error = %e, url = %url, "frankfurter request failed");
            ProviderError::Http(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, "frankfurter returned an error status");
            return Err(ProviderError::Status(status.as_u16()));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::warn!(error = %e, url = %url, "frankfurter payload failed to decode");
            ProviderError::Payload(e.to_string())
        })
    }
}

#[async_trait::async_trait]
impl RateSource for FrankfurterClient {
    async fn fetch_latest(&self, base: &CurrencyCode) -> Result<ExchangeRate, ProviderError> {
        let url = format!("{}/latest?base={}", self.base_url, base);
        let payload: LatestPayload = self.get_json(url).await?;
        to_snapshot(payload)
    }

    async fn fetch_range(
        &self,
        base: &CurrencyCode,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RateSeries, ProviderError> {
        let url = format!("{}/{}..{}?base={}", self.base_url, start, end, base);
        let payload: RangePayload = self.get_json(url).await?;
        to_series(payload)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire payloads
// ─────────────────────────────────────────────────────────────────────────────

/// Shape of `GET /latest?base=X`.
#[derive(Debug, Deserialize)]
struct LatestPayload {
    base: String,
    date: NaiveDate,
    rates: BTreeMap<String, Decimal>,
}

/// Shape of `GET /{start}..{end}?base=X`.
#[derive(Debug, Deserialize)]
struct RangePayload {
    base: String,
    rates: BTreeMap<NaiveDate, BTreeMap<String, Decimal>>,
}

fn parse_code(raw: &str) -> Result<CurrencyCode, ProviderError> {
    CurrencyCode::new(raw)
        .map_err(|_| ProviderError::Payload(format!("unexpected currency code {raw:?}")))
}

fn parse_table(
    raw: BTreeMap<String, Decimal>,
) -> Result<BTreeMap<CurrencyCode, Decimal>, ProviderError> {
    raw.into_iter()
        .map(|(k, v)| Ok((parse_code(&k)?, v)))
        .collect()
}

fn to_snapshot(payload: LatestPayload) -> Result<ExchangeRate, ProviderError> {
    Ok(ExchangeRate::new(
        parse_code(&payload.base)?,
        payload.date,
        parse_table(payload.rates)?,
    ))
}

fn to_series(payload: RangePayload) -> Result<RateSeries, ProviderError> {
    // Base appears only at the top level; each dated table gets the same
    // treatment as a latest snapshot.
    let _base = parse_code(&payload.base)?;
    payload
        .rates
        .into_iter()
        .map(|(date, table)| Ok((date, parse_table(table)?)))
        .collect::<Result<BTreeMap<_, _>, ProviderError>>()
        .map(RateSeries::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    #[test]
    fn test_latest_payload_maps_to_snapshot() {
        let payload: LatestPayload = serde_json::from_str(
            r#"{
                "amount": 1.0,
                "base": "EUR",
                "date": "2024-01-15",
                "rates": { "USD": 1.0872, "GBP": 0.8541 }
            }"#,
        )
        .unwrap();

        let snapshot = to_snapshot(payload).unwrap();
        assert_eq!(snapshot.base, code("EUR"));
        assert_eq!(snapshot.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(snapshot.rate_for(&code("USD")), Some(dec!(1.0872)));
        assert_eq!(snapshot.rate_for(&code("GBP")), Some(dec!(0.8541)));
    }

    #[test]
    fn test_range_payload_maps_to_ordered_series() {
        let payload: RangePayload = serde_json::from_str(
            r#"{
                "amount": 1.0,
                "base": "EUR",
                "start_date": "2020-01-02",
                "end_date": "2020-01-03",
                "rates": {
                    "2020-01-03": { "USD": 1.1170 },
                    "2020-01-02": { "USD": 1.1193 }
                }
            }"#,
        )
        .unwrap();

        let series = to_series(payload).unwrap();
        assert_eq!(series.len(), 2);
        let dates: Vec<_> = series.iter().map(|(d, _)| *d).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2020, 1, 3).unwrap(),
            ]
        );
    }

    #[test]
    fn test_malformed_currency_key_is_payload_error() {
        let payload: LatestPayload = serde_json::from_str(
            r#"{ "base": "EUR", "date": "2024-01-15", "rates": { "US": 1.0 } }"#,
        )
        .unwrap();

        assert!(matches!(
            to_snapshot(payload),
            Err(ProviderError::Payload(_))
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = FrankfurterClient::with_client(
            reqwest::Client::new(),
            "https://api.frankfurter.app/",
        );
        assert_eq!(client.base_url, "https://api.frankfurter.app");
    }
}
