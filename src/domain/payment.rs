use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Timestamp layout used by the payments feed.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single payment from the daily feed.
///
/// Amounts are signed: negative values are refunds or reversals and are
/// aggregated as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRecord {
    pub timestamp: NaiveDateTime,
    pub company: String,
    pub currency: String,
    pub amount: Decimal,
}

impl PaymentRecord {
    pub fn new(
        timestamp: NaiveDateTime,
        company: impl Into<String>,
        currency: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            timestamp,
            company: company.into(),
            currency: currency.into(),
            amount,
        }
    }
}
