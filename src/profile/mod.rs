//! Company profile: the raw quoteSummary record and the company info derived from it.

mod api;
mod model;

pub use model::{CompanyInfo, ProfileRecord};

use crate::core::{
    YfClient, YfError,
    conversions::{non_blank_text, safe_count},
};

/// Loads the profile record for a given symbol.
///
/// # Errors
///
/// Returns `YfError` if the request fails, Yahoo reports an error for the
/// symbol, or the response cannot be parsed.
pub async fn load_profile(client: &YfClient, symbol: &str) -> Result<ProfileRecord, YfError> {
    api::load_from_quote_summary_api(client, symbol).await
}

fn first_text(record: &ProfileRecord, paths: &[&str]) -> Option<String> {
    paths
        .iter()
        .find_map(|p| record.lookup(p).and_then(non_blank_text))
}

/// Build the company info, requiring a non-blank long name.
///
/// # Errors
///
/// Returns `YfError::UnresolvedSymbol` when neither `price.longName` nor
/// `quoteType.longName` holds a name.
pub fn resolve_company(record: &ProfileRecord, symbol: &str) -> Result<CompanyInfo, YfError> {
    let name = first_text(record, &["price.longName", "quoteType.longName"])
        .ok_or_else(|| YfError::UnresolvedSymbol(symbol.to_string()))?;

    Ok(CompanyInfo {
        name,
        sector: first_text(record, &["assetProfile.sector"]),
        industry: first_text(record, &["assetProfile.industry"]),
        website: first_text(record, &["assetProfile.website"]),
        description: first_text(record, &["assetProfile.longBusinessSummary"]),
        country: first_text(record, &["assetProfile.country"]),
        employees: record
            .lookup("assetProfile.fullTimeEmployees")
            .and_then(safe_count),
        exchange: first_text(record, &["price.exchange", "quoteType.exchange"]),
    })
}
