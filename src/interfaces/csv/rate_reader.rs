use super::{feed_reader, feed_records, line_of, parse_decimal};
use crate::domain::conversion::ConversionTable;
use crate::domain::rate::{ExchangeRate, Rate};
use crate::error::Result;
use std::io::Read;

/// Reads exchange rates from a `ignored;source;target;rate` feed.
pub struct RateReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RateReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: feed_reader(source),
        }
    }

    pub fn rates(self) -> impl Iterator<Item = Result<ExchangeRate>> {
        feed_records(self.reader).map(|result| result.and_then(|record| parse_rate(&record)))
    }

    /// Builds a conversion table towards `reference` from the whole feed.
    ///
    /// Later lines for the same pair replace earlier ones.
    pub fn into_table(self, reference: &str) -> Result<ConversionTable> {
        let mut table = ConversionTable::new(reference);
        for rate in self.rates() {
            table.insert(rate?);
        }
        Ok(table)
    }
}

fn parse_rate(record: &csv::StringRecord) -> Result<ExchangeRate> {
    let rate = Rate::new(parse_decimal(line_of(record), &record[3])?)?;
    Ok(ExchangeRate::new(&record[1], &record[2], rate))
}
