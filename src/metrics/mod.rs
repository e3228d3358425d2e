//! Valuation, efficiency, growth and debt ratios pulled from the profile record.

mod model;
pub mod schema;

pub use model::{MetricGroup, MetricsBundle};

use crate::core::{YfError, conversions::safe_float};
use crate::profile::ProfileRecord;
use schema::{GROUPS, MetricField};

fn extract_field(record: &ProfileRecord, field: &MetricField) -> Result<Option<f64>, YfError> {
    for source in field.sources {
        if let Some(v) = record.field(source)?.and_then(safe_float) {
            return Ok(Some(v));
        }
    }
    Ok(None)
}

/// Extract every metric in [`schema::GROUPS`].
///
/// Absent modules or fields yield `null` values; every group and every metric
/// name is always present.
///
/// # Errors
///
/// Returns `YfError::Data` if a source module is present but is not an object.
pub fn extract_metrics(record: &ProfileRecord) -> Result<MetricsBundle, YfError> {
    let mut bundle = MetricsBundle::default();
    for spec in GROUPS {
        let mut group = MetricGroup::default();
        for field in spec.fields {
            group.push(field.name, extract_field(record, field)?);
        }
        bundle.push(spec.name, group);
    }
    Ok(bundle)
}
