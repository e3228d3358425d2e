//! Financial statements: timeseries fetch, pivot into raw tables, normalization.
//!
//! Internals are split into:
//! - `api`:       fundamentals-timeseries requests and the retried six-table fetch
//! - `keys`:      timeseries keys tracked per statement
//! - `model`:     raw and normalized table types
//! - `normalize`: raw table → date-keyed, metric-keyed table of sanitized floats
//! - `wire`:      serde mapping of the timeseries envelope

mod api;
mod keys;
mod model;
mod normalize;
mod wire;

pub use api::{fetch_statements, fetch_table, timeseries_types};
pub use model::{
    FinancialStatements, Frequency, RawColumn, RawStatements, RawTable, StatementKind,
    StatementSet, StatementTable,
};
pub use normalize::{Normalized, SkippedColumn, normalize_statement, normalize_statements};
