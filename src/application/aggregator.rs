use crate::domain::conversion::{Conversion, ConversionTable};
use crate::domain::payment::PaymentRecord;
use crate::domain::report::DailyReport;
use log::warn;

/// Accumulates payments into a [`DailyReport`].
///
/// Payments are recorded one at a time in input order. Native-currency
/// balances always include the payment; the reference-currency metrics only
/// include it when its currency has a direct rate in the table.
pub struct DailyAggregator<'a> {
    table: &'a ConversionTable,
    report: DailyReport,
}

impl<'a> DailyAggregator<'a> {
    /// Creates an aggregator that converts with `table`.
    pub fn new(table: &'a ConversionTable) -> Self {
        Self {
            table,
            report: DailyReport::empty(table.reference()),
        }
    }

    /// Folds a single payment into the running totals.
    ///
    /// A payment that would overflow a running total is left out of that
    /// total: overflowing the native balance drops it from the report, and
    /// overflowing a reference-currency total excludes it like a missing rate.
    pub fn record(&mut self, payment: &PaymentRecord) {
        let report = &mut self.report;
        let converted = self.table.convert(&payment.currency, payment.amount);

        let native = report
            .per_currency
            .get(&payment.currency)
            .copied()
            .unwrap_or_default();
        let Some(native) = native.checked_add(payment.amount) else {
            warn!(
                "Payment of {} {} from {} at {} overflows the {} balance and is ignored.",
                payment.amount,
                payment.currency,
                payment.company,
                payment.timestamp,
                payment.currency
            );
            report.overflowed_payments += 1;
            return;
        };
        report.per_currency.insert(payment.currency.clone(), native);

        let value = match converted {
            Conversion::Converted(value) => value,
            Conversion::NotAvailable => {
                warn!(
                    "No exchange rate available for {} to {}. Payment from {} at {} excluded from {} metrics.",
                    payment.currency,
                    report.reference_currency,
                    payment.company,
                    payment.timestamp,
                    report.reference_currency
                );
                report
                    .unconverted_currencies
                    .insert(payment.currency.clone());
                report.excluded_payments += 1;
                return;
            }
        };

        let company = report
            .per_company
            .get(&payment.company)
            .copied()
            .unwrap_or_default();
        let (Some(volume), Some(company)) = (
            report.volume.checked_add(value.abs()),
            company.checked_add(value),
        ) else {
            warn!(
                "Payment of {} {} from {} at {} overflows the {} totals and is excluded from {} metrics.",
                payment.amount,
                payment.currency,
                payment.company,
                payment.timestamp,
                report.reference_currency,
                report.reference_currency
            );
            report.overflowed_payments += 1;
            report.excluded_payments += 1;
            return;
        };

        report.highest = Some(report.highest.map_or(value, |h| h.max(value)));
        report.lowest = Some(report.lowest.map_or(value, |l| l.min(value)));
        report.volume = volume;
        report.per_company.insert(payment.company.clone(), company);
    }

    /// Consumes the aggregator and returns the finished report.
    pub fn finish(self) -> DailyReport {
        self.report
    }
}

/// Aggregates a full day of payments in one pass.
pub fn aggregate(payments: &[PaymentRecord], table: &ConversionTable) -> DailyReport {
    let mut aggregator = DailyAggregator::new(table);
    for payment in payments {
        aggregator.record(payment);
    }
    aggregator.finish()
}
