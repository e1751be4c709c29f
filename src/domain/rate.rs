use crate::error::AggregatorError;
use rust_decimal::Decimal;

/// A strictly positive conversion factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rate(Decimal);

impl Rate {
    pub fn new(value: Decimal) -> Result<Self, AggregatorError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(AggregatorError::Validation(format!(
                "Exchange rate must be positive, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Rate {
    type Error = AggregatorError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rate> for Decimal {
    fn from(rate: Rate) -> Self {
        rate.0
    }
}

/// One line of the exchange rate feed: `1 source = rate target`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    pub source: String,
    pub target: String,
    pub rate: Rate,
}

impl ExchangeRate {
    pub fn new(source: impl Into<String>, target: impl Into<String>, rate: Rate) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            rate,
        }
    }
}
