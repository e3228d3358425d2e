use std::collections::{BTreeMap, BTreeSet};

use chrono::Utc;
use serde_json::{Map, Value};

use crate::core::{
    Outcome, YfClient, YfError,
    conversions::{camel_to_title, unwrap_raw},
    net,
};

use super::model::{Frequency, RawColumn, RawStatements, RawTable, StatementKind};
use super::wire::{TimeseriesData, TimeseriesEnvelope};

/// Start of the timeseries window; early enough to cover every period Yahoo keeps.
const PERIOD1: i64 = 493_590_046;

/// Comma-separated `type` query value for one statement at one frequency.
#[must_use]
pub fn timeseries_types(freq: Frequency, kind: StatementKind) -> String {
    let prefix = freq.prefix();
    kind.keys()
        .iter()
        .map(|k| format!("{prefix}{k}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Fetch one statement at one frequency and pivot it into a raw table.
///
/// # Errors
///
/// Returns `YfError` on transport failure, a non-2xx status, an unparseable body
/// or an error reported inside the timeseries envelope.
pub async fn fetch_table(
    client: &YfClient,
    symbol: &str,
    freq: Frequency,
    kind: StatementKind,
) -> Result<RawTable, YfError> {
    let mut url = client.base_timeseries().join(symbol)?;
    url.query_pairs_mut()
        .append_pair("symbol", symbol)
        .append_pair("type", &timeseries_types(freq, kind))
        .append_pair("period1", &PERIOD1.to_string())
        .append_pair("period2", &Utc::now().timestamp().to_string());

    client.ensure_credentials().await?;
    if let Some(crumb) = client.crumb().await {
        url.query_pairs_mut().append_pair("crumb", &crumb);
    }

    let resp = client.http().get(url.clone()).send().await?;
    let resp = net::ensure_success(resp, &url)?;
    let endpoint = format!("timeseries_{}_{}", kind.as_str(), freq.prefix());
    let body = net::get_text(resp, &endpoint, symbol).await?;

    let envelope: TimeseriesEnvelope = serde_json::from_str(&body)?;
    let Some(ts) = envelope.timeseries else {
        return Ok(RawTable::default());
    };
    if let Some(err) = ts.error.filter(|e| !e.is_null()) {
        return Err(YfError::Data(format!("timeseries error: {err}")));
    }

    Ok(pivot(freq, kind, ts.result.unwrap_or_default()))
}

/// Turn per-key value lists into per-period columns.
///
/// Every column carries every metric seen in the table; a metric with no entry
/// for a period gets an explicit `null` cell.
pub(crate) fn pivot(freq: Frequency, kind: StatementKind, items: Vec<TimeseriesData>) -> RawTable {
    let prefix = freq.prefix();
    let mut metrics = BTreeSet::new();
    let mut columns: BTreeMap<String, (Value, Map<String, Value>)> = BTreeMap::new();

    for item in items {
        for (key, values) in item.values {
            let Some(stripped) = key.strip_prefix(prefix) else {
                continue;
            };
            if !kind.keys().contains(&stripped) {
                continue;
            }
            let Value::Array(entries) = values else {
                tracing::debug!(key = %key, "timeseries values are not a list; ignored");
                continue;
            };

            let metric = camel_to_title(stripped);
            metrics.insert(metric.clone());

            for entry in entries {
                let Value::Object(entry) = entry else {
                    continue;
                };
                let Some(period) = entry.get("asOfDate").filter(|p| !p.is_null()).cloned()
                else {
                    tracing::debug!(key = %key, "timeseries entry without asOfDate; ignored");
                    continue;
                };
                let cell = entry
                    .get("reportedValue")
                    .map_or(Value::Null, |rv| unwrap_raw(rv).clone());
                columns
                    .entry(period.to_string())
                    .or_insert_with(|| (period, Map::new()))
                    .1
                    .insert(metric.clone(), cell);
            }
        }
    }

    RawTable {
        columns: columns
            .into_values()
            .map(|(period, mut cells)| {
                for m in &metrics {
                    cells.entry(m.clone()).or_insert(Value::Null);
                }
                RawColumn {
                    period,
                    cells: Value::Object(cells),
                }
            })
            .collect(),
    }
}

async fn fetch_all(
    client: &YfClient,
    symbol: &str,
    into: &mut RawStatements,
) -> Result<(), YfError> {
    for freq in Frequency::ALL {
        for kind in StatementKind::ALL {
            let table = fetch_table(client, symbol, freq, kind).await?;
            into.insert(freq, kind, table);
        }
    }
    Ok(())
}

/// Fetch all six statement tables as one retried unit.
///
/// Never fails: when every attempt errors, the tables the last attempt did
/// fetch are returned as a fallback and the others are absent.
pub async fn fetch_statements(client: &YfClient, symbol: &str) -> Outcome<RawStatements> {
    let cfg = client.retry_config();
    let attempts = cfg.attempts();
    let mut fetched = RawStatements::default();
    let mut last_err = None;

    for attempt in 0..attempts {
        let mut tables = RawStatements::default();
        match fetch_all(client, symbol, &mut tables).await {
            Ok(()) => return Outcome::Complete(tables),
            Err(e) => {
                tracing::debug!(symbol, attempt = attempt + 1, attempts, error = %e, "statement fetch failed");
                fetched = tables;
                last_err = Some(e);
                if attempt + 1 < attempts {
                    tokio::time::sleep(cfg.delay()).await;
                }
            }
        }
    }

    let cause = last_err.map_or_else(|| "unknown error".to_string(), |e| e.to_string());
    Outcome::Fallback {
        value: fetched,
        reason: format!("statement fetch failed after {attempts} attempts: {cause}"),
    }
}
