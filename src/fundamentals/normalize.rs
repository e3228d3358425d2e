use std::collections::BTreeMap;

use serde_json::Value;

use crate::core::{
    YfError,
    conversions::{period_key, safe_float},
};

use super::model::{
    FinancialStatements, Frequency, RawColumn, RawStatements, RawTable, StatementKind,
    StatementTable,
};

/// A column left out of a normalized table, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedColumn {
    pub period: String,
    pub reason: String,
}

/// A normalized table plus the columns that had to be dropped from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    pub table: StatementTable,
    pub skipped: Vec<SkippedColumn>,
}

/// Normalize one raw statement.
///
/// An absent or empty table gives an empty mapping. A column that cannot be
/// converted is logged once and skipped; the other columns are kept.
#[must_use]
pub fn normalize_statement(raw: Option<&RawTable>) -> Normalized {
    let mut out = Normalized::default();
    let Some(raw) = raw else {
        return out;
    };

    for column in &raw.columns {
        let key = period_key(&column.period);
        match normalize_column(&key, column, &out.table) {
            Ok(values) => {
                out.table.insert(key, values);
            }
            Err(e) => {
                tracing::warn!(period = %key, "skipping statement column {key}: {e}");
                out.skipped.push(SkippedColumn {
                    period: key,
                    reason: e.to_string(),
                });
            }
        }
    }

    out
}

fn normalize_column(
    key: &str,
    column: &RawColumn,
    table: &StatementTable,
) -> Result<BTreeMap<String, Option<f64>>, YfError> {
    if table.contains_key(key) {
        return Err(YfError::Data(format!("duplicate period {key}")));
    }
    let Value::Object(cells) = &column.cells else {
        return Err(YfError::Data(format!(
            "cells for period {key} are {}, expected an object",
            json_kind(&column.cells)
        )));
    };
    Ok(cells
        .iter()
        .map(|(metric, v)| (metric.clone(), safe_float(v)))
        .collect())
}

const fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Normalize all six tables, tagging diagnostics with `symbol`.
#[must_use]
pub fn normalize_statements(raw: &RawStatements, symbol: &str) -> FinancialStatements {
    let mut out = FinancialStatements::default();
    for freq in Frequency::ALL {
        for kind in StatementKind::ALL {
            let normalized = normalize_statement(raw.get(freq, kind));
            if !normalized.skipped.is_empty() {
                tracing::debug!(
                    symbol,
                    statement = kind.as_str(),
                    frequency = freq.prefix(),
                    skipped = normalized.skipped.len(),
                    "statement normalized with skipped columns"
                );
            }
            *out.get_mut(freq).get_mut(kind) = normalized.table;
        }
    }
    out
}
