#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use dailypay::domain::payment::PaymentRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::io::{Error, Write};
use std::path::Path;

pub const COMPANIES: [&str; 5] = ["Acme", "Globex", "Initech", "Umbrella", "Hooli"];
pub const CURRENCIES: [&str; 5] = ["EUR", "USD", "GBP", "CHF", "JPY"];

pub fn ts(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").unwrap()
}

pub fn payment(time: &str, company: &str, currency: &str, amount: Decimal) -> PaymentRecord {
    PaymentRecord::new(ts(&format!("2024-01-01 {time}")), company, currency, amount)
}

/// Random payments with up to two decimal places, refunds included.
pub fn random_payments(seed: u64, count: usize) -> Vec<PaymentRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    (0..count)
        .map(|_| {
            let company = COMPANIES[rng.gen_range(0..COMPANIES.len())];
            let currency = CURRENCIES[rng.gen_range(0..CURRENCIES.len())];
            let amount = Decimal::new(rng.gen_range(-50_000..100_000), 2);
            let timestamp = start + Duration::seconds(rng.gen_range(0..86_400));
            PaymentRecord::new(timestamp, company, currency, amount)
        })
        .collect()
}

pub fn write_feed(path: &Path, lines: &[&str]) -> Result<(), Error> {
    let mut file = std::fs::File::create(path)?;
    for line in lines {
        writeln!(file, "{line}")?;
    }
    file.flush()
}
