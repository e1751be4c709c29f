use clap::{Parser, ValueEnum};
use dailypay::application::aggregator::aggregate;
use dailypay::interfaces::csv::payment_reader::PaymentReader;
use dailypay::interfaces::csv::rate_reader::RateReader;
use dailypay::interfaces::report_writer::ReportWriter;
use log::info;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Payments file (`timestamp;company;currency;amount` per line)
    #[arg(long, default_value = "payments.txt")]
    payments: PathBuf,

    /// Exchange rates file (`date;source;target;rate` per line)
    #[arg(long, default_value = "currency_rates.txt")]
    rates: PathBuf,

    /// Currency every convertible amount is normalized into
    #[arg(long, default_value = "EUR")]
    reference_currency: String,

    /// Report output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to open {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let payments = PaymentReader::new(open(&cli.payments)?)
        .read_all()
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read payments from {}", cli.payments.display()))?;
    let table = RateReader::new(open(&cli.rates)?)
        .into_table(&cli.reference_currency)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read rates from {}", cli.rates.display()))?;
    info!(
        "Loaded {} payments and {} exchange rates",
        payments.len(),
        table.len()
    );

    let report = aggregate(&payments, &table);

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    let written = match cli.format {
        Format::Text => writer.write_text(&report, &table),
        Format::Json => writer.write_json(&report, &table),
    };
    written.into_diagnostic()
}
