mod common;

use common::{CURRENCIES, random_payments};
use dailypay::application::aggregator::aggregate;
use dailypay::domain::conversion::{Conversion, ConversionTable};
use dailypay::domain::rate::{ExchangeRate, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

// GBP and JPY have no direct rate; GBP->USD must not be chained.
fn partial_table() -> ConversionTable {
    ConversionTable::from_rates(
        "EUR",
        [
            ExchangeRate::new("USD", "EUR", Rate::new(dec!(0.92)).unwrap()),
            ExchangeRate::new("CHF", "EUR", Rate::new(dec!(1.05)).unwrap()),
            ExchangeRate::new("GBP", "USD", Rate::new(dec!(1.27)).unwrap()),
        ],
    )
}

#[test]
fn test_reference_currency_is_identity() {
    let table = partial_table();
    for payment in random_payments(1, 200) {
        assert_eq!(
            table.convert("EUR", payment.amount),
            Conversion::Converted(payment.amount)
        );
    }
}

#[test]
fn test_not_available_iff_rate_missing() {
    let table = partial_table();
    for currency in CURRENCIES.iter().filter(|c| **c != "EUR") {
        let has_rate = table.rate(currency, "EUR").is_some();
        assert_eq!(table.convert(currency, dec!(12.34)).is_available(), has_rate);
    }
}

#[test]
fn test_volume_and_balances_match_definitions() {
    let table = partial_table();

    for seed in 0..20 {
        let payments = random_payments(seed, 500);
        let report = aggregate(&payments, &table);

        let mut volume = Decimal::ZERO;
        let mut per_company: BTreeMap<String, Decimal> = BTreeMap::new();
        let mut per_currency: BTreeMap<String, Decimal> = BTreeMap::new();
        let mut converted = Vec::new();

        for p in &payments {
            *per_currency.entry(p.currency.clone()).or_default() += p.amount;
            if let Conversion::Converted(value) = table.convert(&p.currency, p.amount) {
                volume += value.abs();
                *per_company.entry(p.company.clone()).or_default() += value;
                converted.push(value);
            }
        }

        assert!(report.volume >= Decimal::ZERO);
        assert_eq!(report.volume, volume);
        assert_eq!(report.per_company, per_company);
        assert_eq!(report.per_currency, per_currency);
        assert_eq!(report.highest, converted.iter().copied().max());
        assert_eq!(report.lowest, converted.iter().copied().min());
        assert_eq!(report.excluded_payments, payments.len() - converted.len());
    }
}

#[test]
fn test_result_is_order_independent() {
    let table = partial_table();
    let payments = random_payments(42, 300);
    let mut reversed = payments.clone();
    reversed.reverse();

    assert_eq!(aggregate(&payments, &table), aggregate(&reversed, &table));
}

#[test]
fn test_no_convertible_payment_means_no_extremes() {
    let payments: Vec<_> = random_payments(7, 100)
        .into_iter()
        .filter(|p| p.currency == "JPY" || p.currency == "GBP")
        .collect();

    let report = aggregate(&payments, &partial_table());

    assert_eq!(report.highest, None);
    assert_eq!(report.lowest, None);
    assert_eq!(report.volume, Decimal::ZERO);
    assert!(report.per_company.is_empty());
}
