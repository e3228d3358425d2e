//! Public client surface + builder.
//! Internals are split into `auth` (cookie/crumb), `constants` (UA + defaults)
//! and `retry` (attempt policy for the combined statement fetch).

mod auth;
mod constants;
pub mod retry;

use crate::core::YfError;
use constants::{
    DEFAULT_BASE_QUOTE_API, DEFAULT_BASE_TIMESERIES, DEFAULT_CONNECT_TIMEOUT, DEFAULT_COOKIE_URL,
    DEFAULT_CRUMB_URL, DEFAULT_TIMEOUT, USER_AGENT,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use url::Url;

pub use retry::{Backoff, RetryConfig};

#[derive(Debug, Default)]
struct ClientState {
    cookie: Option<String>,
    crumb: Option<String>,
}

/// Holds a configured HTTP client, the Yahoo endpoint bases and the session credentials.
///
/// Cloning is cheap; clones share the same credential state.
#[derive(Debug, Clone)]
pub struct YfClient {
    http: Client,
    base_quote_api: Url,
    base_timeseries: Url,
    cookie_url: Url,
    crumb_url: Url,
    retry: RetryConfig,
    state: Arc<RwLock<ClientState>>,
}

impl YfClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> YfClientBuilder {
        YfClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) const fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) const fn base_quote_api(&self) -> &Url {
        &self.base_quote_api
    }
    pub(crate) const fn base_timeseries(&self) -> &Url {
        &self.base_timeseries
    }

    /// The retry policy applied to the combined statement fetch.
    #[must_use]
    pub const fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct YfClientBuilder {
    user_agent: Option<String>,
    base_quote_api: Option<Url>,
    base_timeseries: Option<Url>,
    cookie_url: Option<Url>,
    crumb_url: Option<Url>,
    preauth_cookie: Option<String>,
    preauth_crumb: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl YfClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the quoteSummary API base (e.g., `https://query1.finance.yahoo.com/v10/finance/quoteSummary/`).
    #[must_use]
    pub fn base_quote_api(mut self, url: Url) -> Self {
        self.base_quote_api = Some(url);
        self
    }

    /// Override the fundamentals timeseries base
    /// (e.g., `https://query2.finance.yahoo.com/ws/fundamentals-timeseries/v1/finance/timeseries/`).
    #[must_use]
    pub fn base_timeseries(mut self, url: Url) -> Self {
        self.base_timeseries = Some(url);
        self
    }

    /// Override the cookie bootstrap URL.
    #[must_use]
    pub fn cookie_url(mut self, url: Url) -> Self {
        self.cookie_url = Some(url);
        self
    }

    /// Override the crumb URL.
    #[must_use]
    pub fn crumb_url(mut self, url: Url) -> Self {
        self.crumb_url = Some(url);
        self
    }

    /// Provide credentials up front, skipping the cookie/crumb bootstrap.
    #[must_use]
    pub fn preauth(mut self, cookie: impl Into<String>, crumb: impl Into<String>) -> Self {
        self.preauth_cookie = Some(cookie.into());
        self.preauth_crumb = Some(crumb.into());
        self
    }

    /// Set the overall request timeout. Default: 30 seconds.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set the connect timeout. Default: 10 seconds.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the retry policy for the combined statement fetch.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `YfError` if a default URL fails to parse or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<YfClient, YfError> {
        let base_quote_api = match self.base_quote_api {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUOTE_API)?,
        };
        let base_timeseries = match self.base_timeseries {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_TIMESERIES)?,
        };
        let cookie_url = match self.cookie_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_COOKIE_URL)?,
        };
        let crumb_url = match self.crumb_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_CRUMB_URL)?,
        };

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .connect_timeout(self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
            .build()?;

        Ok(YfClient {
            http,
            base_quote_api,
            base_timeseries,
            cookie_url,
            crumb_url,
            retry: self.retry.unwrap_or_default(),
            state: Arc::new(RwLock::new(ClientState {
                cookie: self.preauth_cookie,
                crumb: self.preauth_crumb,
            })),
        })
    }
}
