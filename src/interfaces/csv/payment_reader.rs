use super::{feed_reader, feed_records, line_of, parse_decimal};
use crate::domain::payment::{PaymentRecord, TIMESTAMP_FORMAT};
use crate::error::{AggregatorError, Result};
use chrono::NaiveDateTime;
use std::io::Read;

/// Reads payments from a `timestamp;company;currency;amount` feed.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: feed_reader(source),
        }
    }

    /// Returns an iterator over the parsed payments.
    ///
    /// Lines with the wrong number of fields never show up here.
    pub fn payments(self) -> impl Iterator<Item = Result<PaymentRecord>> {
        feed_records(self.reader).map(|result| result.and_then(|record| parse_payment(&record)))
    }

    /// Reads the whole feed, stopping at the first malformed value.
    pub fn read_all(self) -> Result<Vec<PaymentRecord>> {
        self.payments().collect()
    }
}

fn parse_payment(record: &csv::StringRecord) -> Result<PaymentRecord> {
    let line = line_of(record);
    let timestamp = NaiveDateTime::parse_from_str(&record[0], TIMESTAMP_FORMAT).map_err(
        |source| AggregatorError::Timestamp {
            line,
            value: record[0].to_string(),
            source,
        },
    )?;
    let amount = parse_decimal(line, &record[3])?;

    Ok(PaymentRecord::new(timestamp, &record[1], &record[2], amount))
}
