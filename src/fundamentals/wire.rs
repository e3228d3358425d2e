use std::collections::BTreeMap;

use serde::Deserialize;

/* ---------------- Serde mapping for /ws/fundamentals-timeseries ---------------- */

#[derive(Deserialize)]
pub(crate) struct TimeseriesEnvelope {
    pub(crate) timeseries: Option<TimeseriesResult>,
}

#[derive(Deserialize)]
pub(crate) struct TimeseriesResult {
    pub(crate) result: Option<Vec<TimeseriesData>>,
    pub(crate) error: Option<serde_json::Value>,
}

/// One requested key. The values sit under the prefixed key itself, e.g.
/// `"quarterlyTotalRevenue": [{"asOfDate": "2024-06-30", "reportedValue": {"raw": ..}}, null]`.
#[derive(Deserialize)]
pub(crate) struct TimeseriesData {
    // Named so they stay out of `values`.
    #[allow(dead_code)]
    pub(crate) meta: Option<serde_json::Value>,
    #[allow(dead_code)]
    pub(crate) timestamp: Option<Vec<i64>>,
    #[serde(flatten)]
    pub(crate) values: BTreeMap<String, serde_json::Value>,
}
