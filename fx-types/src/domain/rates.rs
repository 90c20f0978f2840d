//! Exchange rate snapshots and historical series.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CurrencyCode;

/// A snapshot of exchange rates for one base currency at one date.
///
/// Rates are expressed as units of the target currency per one unit of the
/// base. The base currency itself is never a key of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ExchangeRate {
    /// Currency all rates are expressed against.
    pub base: CurrencyCode,
    /// Date the snapshot was taken.
    #[schema(value_type = String, example = "2024-01-15")]
    pub date: NaiveDate,
    /// Target currency -> rate relative to the base.
    #[schema(value_type = Object)]
    pub rates: BTreeMap<CurrencyCode, Decimal>,
}

impl ExchangeRate {
    /// Creates a snapshot, dropping any self-referential base entry.
    pub fn new(
        base: CurrencyCode,
        date: NaiveDate,
        mut rates: BTreeMap<CurrencyCode, Decimal>,
    ) -> Self {
        rates.remove(&base);
        Self { base, date, rates }
    }

    /// Looks up the rate for a target currency.
    pub fn rate_for(&self, target: &CurrencyCode) -> Option<Decimal> {
        self.rates.get(target).copied()
    }
}

/// One dated entry of a historical series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RateEntry {
    #[schema(value_type = String, example = "2024-01-15")]
    pub date: NaiveDate,
    #[schema(value_type = Object)]
    pub rates: BTreeMap<CurrencyCode, Decimal>,
}

/// A date-ascending series of rate tables, as returned by a ranged fetch.
///
/// Backed by an ordered map keyed by date, so iteration order is always
/// ascending and each date appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateSeries(BTreeMap<NaiveDate, BTreeMap<CurrencyCode, Decimal>>);

impl RateSeries {
    pub fn new(entries: BTreeMap<NaiveDate, BTreeMap<CurrencyCode, Decimal>>) -> Self {
        Self(entries)
    }

    /// Number of dated entries in the series.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &BTreeMap<CurrencyCode, Decimal>)> {
        self.0.iter()
    }
}

impl FromIterator<(NaiveDate, BTreeMap<CurrencyCode, Decimal>)> for RateSeries {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, BTreeMap<CurrencyCode, Decimal>)>>(
        iter: I,
    ) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Outcome of a successful conversion: the original request terms plus the
/// rate applied and the unrounded product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Conversion {
    #[schema(value_type = f64, example = 100.0)]
    pub amount: Decimal,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    /// Rate used for the conversion (units of `to` per one `from`).
    #[schema(value_type = f64, example = 1.0872)]
    pub rate: Decimal,
    /// `amount * rate`, not rounded. Round for display only.
    #[schema(value_type = f64, example = 108.72)]
    pub converted_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    #[test]
    fn test_exchange_rate_strips_base_entry() {
        let mut rates = BTreeMap::new();
        rates.insert(code("EUR"), dec!(1.0));
        rates.insert(code("USD"), dec!(1.2));
        let snapshot = ExchangeRate::new(
            code("EUR"),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            rates,
        );
        assert!(snapshot.rate_for(&code("EUR")).is_none());
        assert_eq!(snapshot.rate_for(&code("USD")), Some(dec!(1.2)));
    }

    #[test]
    fn test_rate_series_orders_by_date() {
        let series: RateSeries = [
            (NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(), BTreeMap::new()),
            (NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), BTreeMap::new()),
            (NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), BTreeMap::new()),
        ]
        .into_iter()
        .collect();

        let dates: Vec<_> = series.iter().map(|(d, _)| *d).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            ]
        );
        assert_eq!(series.len(), 3);
    }
}
