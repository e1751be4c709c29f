//! Readers for the `;`-delimited payment and exchange rate feeds.
//!
//! Both feeds have no header and exactly four fields per line. Lines with a
//! different field count are skipped; a line with the right shape but an
//! unparsable value is an error.

pub mod payment_reader;
pub mod rate_reader;

use crate::error::{AggregatorError, Result};
use log::debug;
use rust_decimal::Decimal;
use std::io::Read;
use std::str::FromStr;

const FIELD_COUNT: usize = 4;

fn feed_reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .quoting(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source)
}

fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map_or(0, |pos| pos.line())
}

/// Yields well-shaped records, dropping the ones with the wrong field count.
fn feed_records<R: Read>(
    reader: csv::Reader<R>,
) -> impl Iterator<Item = Result<csv::StringRecord>> {
    reader.into_records().filter_map(|result| match result {
        Ok(mut record) => {
            drop_trailing_empty(&mut record);
            if record.len() == FIELD_COUNT {
                return Some(Ok(record));
            }
            debug!(
                "Skipping line {}: expected {} fields, found {}",
                line_of(&record),
                FIELD_COUNT,
                record.len()
            );
            None
        }
        Err(e) => Some(Err(AggregatorError::from(e))),
    })
}

/// `a;b;c;d;` counts as four fields, like a plain split that drops trailing
/// empty pieces.
fn drop_trailing_empty(record: &mut csv::StringRecord) {
    while record.iter().last() == Some("") {
        record.truncate(record.len() - 1);
    }
}

fn parse_decimal(line: u64, value: &str) -> Result<Decimal> {
    Decimal::from_str(value)
        .or_else(|e| Decimal::from_scientific(value).map_err(|_| e))
        .map_err(|source| AggregatorError::Amount {
            line,
            value: value.to_string(),
            source,
        })
}
