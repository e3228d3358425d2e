//! Centralized constants for default endpoints, UA and transport limits.

use std::time::Duration;

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Yahoo quoteSummary API base (symbol is appended).
pub(crate) const DEFAULT_BASE_QUOTE_API: &str =
    "https://query1.finance.yahoo.com/v10/finance/quoteSummary/";

/// Yahoo fundamentals timeseries base (symbol is appended).
pub(crate) const DEFAULT_BASE_TIMESERIES: &str =
    "https://query2.finance.yahoo.com/ws/fundamentals-timeseries/v1/finance/timeseries/";

/// A URL that returns a Set-Cookie header for Yahoo domains.
pub(crate) const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com/consent";

/// URL to fetch a crumb (requires cookie from `DEFAULT_COOKIE_URL`).
pub(crate) const DEFAULT_CRUMB_URL: &str = "https://query1.finance.yahoo.com/v1/test/getcrumb";

/// Overall request timeout. The caller kills the process after 30 seconds anyway.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
