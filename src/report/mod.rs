//! Assembles the result envelope from the profile, statement and metrics substeps.

mod model;

pub use model::{FinancialReport, ResultEnvelope};

use crate::core::{Outcome, Symbol, YfClient, YfError};
use crate::metrics::{self, MetricsBundle};
use crate::{fundamentals, profile};

/// Run the whole pipeline for `symbol`.
///
/// The profile is required: a transport failure or a missing company name
/// fails the request before any statement is fetched. Statements and metrics
/// degrade to empty values with a warning instead of failing.
///
/// # Errors
///
/// Returns `YfError` when the profile cannot be loaded or names no company.
pub async fn build_report(client: &YfClient, symbol: &Symbol) -> Result<FinancialReport, YfError> {
    let sym = symbol.as_str();

    let record = profile::load_profile(client, sym).await?;
    let company_info = profile::resolve_company(&record, sym)?;

    let raw = fundamentals::fetch_statements(client, sym)
        .await
        .into_value_logged("statement fetch", sym);
    let financial_statements = fundamentals::normalize_statements(&raw, sym);

    let metrics = Outcome::recover(metrics::extract_metrics(&record), MetricsBundle::default)
        .into_value_logged("metrics extraction", sym);

    Ok(FinancialReport {
        symbol: symbol.clone(),
        company_info,
        financial_statements,
        metrics,
    })
}

/// Run the pipeline and wrap the result in an envelope; never fails.
pub async fn fetch_report(client: &YfClient, symbol: &Symbol) -> ResultEnvelope {
    let res = build_report(client, symbol).await;
    if let Err(e) = &res {
        tracing::debug!(symbol = %symbol, error = %e, "report failed");
    }
    ResultEnvelope::from(res)
}
