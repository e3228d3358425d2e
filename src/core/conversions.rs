//! Conversions from loosely-typed upstream values into the output types.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Unwrap Yahoo's `{"raw": .., "fmt": ..}` number wrapper, leaving other values untouched.
#[must_use]
pub fn unwrap_raw(value: &Value) -> &Value {
    match value {
        Value::Object(map) => map.get("raw").unwrap_or(value),
        _ => value,
    }
}

/// Convert any upstream scalar into a finite `f64`.
///
/// `null`, NaN, infinities, booleans, arrays, objects without a `raw` field and
/// strings that do not parse as a number all yield `None`.
#[must_use]
pub fn safe_float(value: &Value) -> Option<f64> {
    let parsed = match unwrap_raw(value) {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

/// Convert an upstream value into a non-negative whole count, e.g. an employee count.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn safe_count(value: &Value) -> Option<u64> {
    if let Some(n) = unwrap_raw(value).as_u64() {
        return Some(n);
    }
    safe_float(value).and_then(|f| {
        let rounded = f.round();
        // Bounds are checked before the cast.
        (rounded >= 0.0 && rounded <= u64::MAX as f64).then_some(rounded as u64)
    })
}

/// Text content of an upstream value; blank strings count as absent.
#[must_use]
pub fn non_blank_text(value: &Value) -> Option<String> {
    match unwrap_raw(value) {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Format a reporting-period value as a `YYYY-MM-DD` key.
///
/// Date strings, date-time strings and epoch seconds are formatted; anything
/// else falls back to its raw string representation so no period is lost.
#[must_use]
pub fn period_key(value: &Value) -> String {
    match value {
        Value::String(s) => date_from_str(s).map_or_else(|| s.clone(), format_date),
        Value::Number(n) => n
            .as_i64()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map_or_else(|| n.to_string(), |dt| format_date(dt.date_naive())),
        other => other.to_string(),
    }
}

fn date_from_str(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Turn a timeseries key such as `NormalizedEBITDA` into `Normalized EBITDA`.
///
/// A space goes between a lower-case letter or digit and the following
/// capital, and between an acronym and the capitalised word after it.
#[must_use]
pub fn camel_to_title(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                out.push(' ');
            }
        }
        out.push(c);
    }
    let mut it = out.chars();
    match it.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + it.as_str(),
        None => out,
    }
}
