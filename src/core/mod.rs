//! Core components of the `yfinance-financials` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`YfClient`] and its builder.
//! - The primary [`YfError`] type.
//! - The numeric sanitizer and other upstream value conversions.
//! - Internal networking and authentication logic.

/// The main client (`YfClient`), builder, and configuration.
pub mod client;
/// Conversions from raw upstream JSON values (`safe_float` and friends).
pub mod conversions;
/// The primary error type (`YfError`) for the crate.
pub mod error;
/// Outcome of substeps that degrade instead of failing.
pub mod outcome;
pub(crate) mod quotesummary;
/// Ticker symbol parsing.
pub mod symbol;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::YfClient`
pub use client::{Backoff, RetryConfig, YfClient, YfClientBuilder};
pub use error::YfError;
pub use outcome::Outcome;
pub use symbol::Symbol;
