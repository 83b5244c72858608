//! FluxRate - convert currencies from the command line
//!
//! A CLI that converts amounts between currencies, shows a rate ticker and
//! rate history, and keeps working offline by caching every exchange-rate
//! API response on disk.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fluxrate::api::{HttpTransport, RateFetcher, RatesClient};
use fluxrate::backup;
use fluxrate::cli::{parse_currency_arg, Cli, Command};
use fluxrate::convert::{convert, format_amount, format_rate, identity_conversion};
use fluxrate::data::{all_currencies, Conversion};
use fluxrate::store::{self, RateStore};
use fluxrate::ticker::ticker_entries;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store = open_store(cli.cache_dir.clone()).await;
    let transport = Arc::new(HttpTransport::with_timeout(Duration::from_secs(cli.timeout)));
    let client = RatesClient::with_fetcher(RateFetcher::with_transport(transport, store.clone()));

    match cli.command {
        Command::Convert { amount, from, to } => run_convert(&client, amount, &from, &to).await?,
        Command::Rates { from } => run_rates(&client, &from).await?,
        Command::History { from, to, days } => run_history(&client, &from, &to, days).await?,
        Command::Currencies => run_currencies(),
        Command::Export { out } => run_export(store.as_ref(), out).await?,
        Command::Import { path } => run_import(store.as_ref(), &path).await?,
    }

    Ok(())
}

/// Opens the rate store, honoring the `--cache-dir` override
///
/// Without an override the process-wide shared handle is used, so every
/// command in this process sees the same store.
async fn open_store(override_dir: Option<PathBuf>) -> Option<RateStore> {
    match override_dir {
        Some(dir) => RateStore::open_at(dir).await,
        None => store::shared().await.cloned(),
    }
}

/// Runs the `convert` subcommand
async fn run_convert(
    client: &RatesClient,
    amount: f64,
    from: &str,
    to: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let from = parse_currency_arg(from)?;
    let to = parse_currency_arg(to)?;

    // Same-currency conversion never needs a quote
    let conversion = if from.code == to.code {
        identity_conversion(amount, from.code)
    } else {
        let quote = client.fetch_latest(from.code).await?;
        convert(&quote, amount, to.code)?
    };

    print_conversion(&conversion);
    Ok(())
}

/// Prints a conversion result and the applied rate
fn print_conversion(conversion: &Conversion) {
    println!(
        "{} {} = {} {}",
        format_amount(conversion.amount),
        conversion.from,
        format_amount(conversion.result),
        conversion.to
    );
    match conversion.date {
        Some(date) => println!(
            "1 {} = {} {} ({})",
            conversion.from,
            format_rate(conversion.rate),
            conversion.to,
            date
        ),
        None => println!(
            "1 {} = {} {}",
            conversion.from,
            format_rate(conversion.rate),
            conversion.to
        ),
    }
}

/// Runs the `rates` subcommand: the ticker of quotes against a base
async fn run_rates(client: &RatesClient, base: &str) -> Result<(), Box<dyn std::error::Error>> {
    let base = parse_currency_arg(base)?;
    let quote = client.fetch_latest(base.code).await?;
    let entries = ticker_entries(&quote);

    println!("Rates against {} ({})", quote.base, quote.date);
    let name_width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in &entries {
        println!(
            "  {}  {:<width$}  {:>12}",
            entry.code,
            entry.name,
            format_rate(entry.rate),
            width = name_width
        );
    }

    Ok(())
}

/// Runs the `history` subcommand
async fn run_history(
    client: &RatesClient,
    from: &str,
    to: &str,
    days: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let from = parse_currency_arg(from)?;
    let to = parse_currency_arg(to)?;

    if from.code == to.code {
        println!("1 {} = 1.0000 {} for every date", from.code, to.code);
        return Ok(());
    }

    let history = client.fetch_history(from.code, to.code, days).await?;
    let series = history.series_for(to.code);

    println!(
        "1 {} in {} from {} to {}",
        history.base, to.code, history.start_date, history.end_date
    );
    for (date, rate) in &series {
        println!("  {}  {:>12}", date, format_rate(*rate));
    }
    if series.is_empty() {
        println!("  (no quotes in range)");
    }

    Ok(())
}

/// Runs the `currencies` subcommand
fn run_currencies() {
    for currency in all_currencies() {
        println!("  {}  {}", currency.code, currency.name);
    }
}

/// Runs the `export` subcommand
async fn run_export(
    store: Option<&RateStore>,
    out: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = out.unwrap_or_else(|| {
        PathBuf::from(backup::default_backup_filename(Utc::now().date_naive()))
    });
    let count = backup::export_to(store, &path).await?;
    println!("Exported {} records to {}", count, path.display());
    Ok(())
}

/// Runs the `import` subcommand
async fn run_import(
    store: Option<&RateStore>,
    path: &std::path::Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let count = backup::import_from(store, path).await?;
    println!("Restored {} records from {}", count, path.display());
    Ok(())
}
