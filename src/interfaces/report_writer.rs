use crate::domain::conversion::ConversionTable;
use crate::domain::report::{CurrencyBalance, DailyReport};
use crate::error::Result;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::io::Write;

const NOT_AVAILABLE: &str = "N.A.";
const TITLE: &str = "========= Daily Payment Aggregation Results =========";
const SEPARATOR: &str = "=============================================";
const FOOTER: &str = "=====================================================";

/// Formats an amount with exactly two decimals, rounding half away from zero.
pub fn format_money(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a DailyReport,
    currency_balances: Vec<CurrencyBalance>,
}

/// Renders a [`DailyReport`] to any `Write` sink.
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes the human-readable daily summary.
    pub fn write_text(&mut self, report: &DailyReport, table: &ConversionTable) -> Result<()> {
        let w = &mut self.writer;
        let reference = &report.reference_currency;

        writeln!(w)?;
        writeln!(w, "{TITLE}")?;
        writeln!(
            w,
            "Highest {reference} value: {}",
            extreme(report.highest, reference)
        )?;
        writeln!(
            w,
            "Lowest {reference} value: {}",
            extreme(report.lowest, reference)
        )?;
        writeln!(w, "\n{SEPARATOR}")?;

        writeln!(w, "\n Outstanding amounts per company:")?;
        if report.per_company.is_empty() {
            writeln!(w, "No company transactions available!")?;
        } else {
            for (company, amount) in &report.per_company {
                writeln!(w, "   - {company}: {} {reference}", format_money(*amount))?;
            }
        }

        writeln!(w, "\n{SEPARATOR}")?;
        writeln!(
            w,
            "Transaction volume in {reference}: {} {reference}",
            format_money(report.volume)
        )?;

        writeln!(w, "\n Outstanding amounts per currency:")?;
        let balances = report.currency_balances(table);
        if balances.is_empty() {
            writeln!(w, "No outstanding amounts found!")?;
        } else {
            for balance in &balances {
                match balance.reference_value {
                    Some(value) => writeln!(
                        w,
                        "   - {}: {} ({} {reference})",
                        balance.currency,
                        format_money(balance.amount),
                        format_money(value)
                    )?,
                    None => writeln!(
                        w,
                        "   - {}: {}",
                        balance.currency,
                        format_money(balance.amount)
                    )?,
                }
            }
        }
        writeln!(w, "\n{FOOTER}")?;

        self.writer.flush()?;
        Ok(())
    }

    /// Writes the report and its per-currency annotations as pretty JSON.
    pub fn write_json(&mut self, report: &DailyReport, table: &ConversionTable) -> Result<()> {
        let json = JsonReport {
            report,
            currency_balances: report.currency_balances(table),
        };
        serde_json::to_writer_pretty(&mut self.writer, &json)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn extreme(value: Option<Decimal>, reference: &str) -> String {
    match value {
        Some(v) => format!("{} {reference}", format_money(v)),
        None => NOT_AVAILABLE.to_string(),
    }
}
