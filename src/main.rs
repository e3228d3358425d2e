use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use yfinance_financials::{ResultEnvelope, Symbol, YfClient, report};

const USAGE_ERROR: &str = "Symbol argument required";

/// Fetch a company's financial statements and metrics as JSON.
#[derive(Debug, Parser)]
#[command(
    name = "yf-financials",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Ticker symbol, e.g. AAPL. Upper-cased before use.
    symbol: String,
}

/// Diagnostics go to stderr so stdout only ever carries the JSON document.
fn init_tracing() {
    let default_level = if std::env::var("YF_DEBUG").ok().as_deref() == Some("1") {
        "debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn run(args: Vec<OsString>) -> ResultEnvelope {
    // Program name plus exactly one argument; clap alone would also accept `-- SYMBOL`.
    if args.len() != 2 {
        return ResultEnvelope::error(USAGE_ERROR);
    }

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            tracing::debug!(error = %e, "argument parsing failed");
            return ResultEnvelope::error(USAGE_ERROR);
        }
    };

    let symbol = match Symbol::parse(&cli.symbol) {
        Ok(s) => s,
        Err(e) => return ResultEnvelope::error(e.to_string()),
    };

    let client = match YfClient::builder().build() {
        Ok(c) => c,
        Err(e) => return ResultEnvelope::error(e.to_string()),
    };

    // A panic inside the pipeline surfaces as a join error rather than aborting
    // without a document on stdout.
    let task = tokio::spawn(async move { report::fetch_report(&client, &symbol).await });
    match task.await {
        Ok(envelope) => envelope,
        Err(e) => ResultEnvelope::error(format!("internal error: {e}")),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let envelope = run(std::env::args_os().collect()).await;
    println!("{}", envelope.to_json());

    ExitCode::from(envelope.exit_code())
}
