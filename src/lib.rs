//! yfinance-financials: a company's financial statements and valuation metrics
//! from Yahoo Finance, reshaped into one JSON document.
//!
//! The pipeline for one symbol is:
//! 1. load the quoteSummary profile and require a company name ([`profile`]),
//! 2. fetch the six statement tables as one retried unit ([`fundamentals`]),
//! 3. normalize each table into date → metric → value ([`fundamentals::normalize_statement`]),
//! 4. pull the metric groups out of the profile ([`metrics`]),
//! 5. assemble the [`ResultEnvelope`] ([`report`]).
//!
//! ```no_run
//! # use yfinance_financials::{Symbol, YfClient, report};
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = YfClient::builder().build()?;
//! let envelope = report::fetch_report(&client, &Symbol::parse("aapl")?).await;
//! println!("{}", envelope.to_json());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod fundamentals;
pub mod metrics;
pub mod profile;
pub mod report;

pub use crate::core::{Backoff, Outcome, RetryConfig, Symbol, YfClient, YfClientBuilder, YfError};
pub use fundamentals::{FinancialStatements, StatementTable};
pub use metrics::MetricsBundle;
pub use profile::{CompanyInfo, ProfileRecord};
pub use report::{FinancialReport, ResultEnvelope};
