use super::conversion::ConversionTable;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Result of aggregating one day of payments.
///
/// Everything except `per_currency` is expressed in `reference_currency` and
/// only covers payments that could be converted. `per_currency` holds native
/// amounts for every payment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyReport {
    pub reference_currency: String,
    /// Largest converted single payment, `None` when nothing was convertible.
    pub highest: Option<Decimal>,
    /// Smallest converted single payment, `None` when nothing was convertible.
    pub lowest: Option<Decimal>,
    /// Sum of absolute converted values.
    pub volume: Decimal,
    pub per_company: BTreeMap<String, Decimal>,
    pub per_currency: BTreeMap<String, Decimal>,
    /// Currencies without a direct rate to the reference currency.
    pub unconverted_currencies: BTreeSet<String>,
    /// Payments left out of the reference-currency metrics.
    pub excluded_payments: usize,
    /// Payments left out of at least one total because adding them overflowed.
    pub overflowed_payments: usize,
}

impl DailyReport {
    pub fn empty(reference_currency: impl Into<String>) -> Self {
        Self {
            reference_currency: reference_currency.into(),
            highest: None,
            lowest: None,
            volume: Decimal::ZERO,
            per_company: BTreeMap::new(),
            per_currency: BTreeMap::new(),
            unconverted_currencies: BTreeSet::new(),
            excluded_payments: 0,
            overflowed_payments: 0,
        }
    }

    /// Per-currency balances annotated with their reference-currency value.
    ///
    /// The annotation converts the aggregated native total, not the sum of
    /// per-payment conversions. It is left empty for the reference currency
    /// and for currencies without a rate.
    pub fn currency_balances(&self, table: &ConversionTable) -> Vec<CurrencyBalance> {
        self.per_currency
            .iter()
            .map(|(currency, &amount)| {
                let is_reference = *currency == self.reference_currency;
                let reference_value = if is_reference {
                    None
                } else {
                    table.convert(currency, amount).value()
                };
                CurrencyBalance {
                    currency: currency.clone(),
                    amount,
                    reference_value,
                    is_reference,
                }
            })
            .collect()
    }
}

/// One row of the per-currency section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyBalance {
    pub currency: String,
    pub amount: Decimal,
    pub reference_value: Option<Decimal>,
    pub is_reference: bool,
}
