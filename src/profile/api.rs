//! quoteSummary v10 API path for the profile record.

use crate::core::{YfClient, YfError, quotesummary};

use super::ProfileRecord;

/// Modules requested in one call; they cover both company info and every metric source.
pub(crate) const PROFILE_MODULES: &str =
    "assetProfile,price,quoteType,summaryDetail,defaultKeyStatistics,financialData";

/// Fetch the profile record. An empty result yields an empty record, not an error.
pub(crate) async fn load_from_quote_summary_api(
    client: &YfClient,
    symbol: &str,
) -> Result<ProfileRecord, YfError> {
    match quotesummary::fetch_first_result(client, symbol, PROFILE_MODULES, "profile").await? {
        Some(value) => ProfileRecord::from_value(value),
        None => Ok(ProfileRecord::default()),
    }
}
