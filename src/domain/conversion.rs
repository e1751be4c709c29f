use super::rate::ExchangeRate;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Outcome of converting an amount into the reference currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    Converted(Decimal),
    NotAvailable,
}

impl Conversion {
    pub fn value(self) -> Option<Decimal> {
        match self {
            Conversion::Converted(value) => Some(value),
            Conversion::NotAvailable => None,
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, Conversion::Converted(_))
    }
}

/// Single-hop rate lookup keyed by `(source, target)`.
///
/// Built once from the rate feed; a later entry for the same pair replaces an
/// earlier one. Only direct `(currency, reference)` pairs are ever consulted.
#[derive(Debug, Clone)]
pub struct ConversionTable {
    reference: String,
    rates: HashMap<(String, String), Decimal>,
}

impl ConversionTable {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            rates: HashMap::new(),
        }
    }

    pub fn from_rates<I>(reference: impl Into<String>, rates: I) -> Self
    where
        I: IntoIterator<Item = ExchangeRate>,
    {
        let mut table = Self::new(reference);
        for rate in rates {
            table.insert(rate);
        }
        table
    }

    pub fn insert(&mut self, rate: ExchangeRate) {
        self.rates
            .insert((rate.source, rate.target), rate.rate.value());
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn rate(&self, source: &str, target: &str) -> Option<Decimal> {
        self.rates
            .get(&(source.to_string(), target.to_string()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Converts `amount` of `currency` into the reference currency.
    ///
    /// The reference currency converts to itself without a lookup. Any other
    /// currency needs a direct `(currency, reference)` entry; there is no
    /// chaining through intermediate currencies.
    pub fn convert(&self, currency: &str, amount: Decimal) -> Conversion {
        if currency == self.reference {
            return Conversion::Converted(amount);
        }

        match self.rate(currency, &self.reference) {
            // Overflow is treated like a missing rate so this never panics.
            Some(rate) => amount
                .checked_mul(rate)
                .map_or(Conversion::NotAvailable, Conversion::Converted),
            None => Conversion::NotAvailable,
        }
    }
}
