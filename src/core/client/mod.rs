//! Public client surface + builder.
//! Defaults (UA, endpoints, timeout) live in `constants`.

mod constants;

use crate::core::ReportError;
use constants::{DEFAULT_BASE_CHART, DEFAULT_BASE_NEWS, DEFAULT_TIMEOUT, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Thin wrapper that holds a configured HTTP client and the upstream base URLs.
///
/// One client is built per run and shared by every source; it carries no state
/// between requests other than the connection pool and cookie jar.
#[derive(Debug, Clone)]
pub struct ReportClient {
    http: Client,
    base_chart: Url,
    base_news: Url,
}

impl ReportClient {
    /// Create a new builder.
    pub fn builder() -> ReportClientBuilder {
        ReportClientBuilder::default()
    }

    /// Build a client with every default (Yahoo + Google News, 20 s timeout).
    ///
    /// # Errors
    ///
    /// Fails only if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, ReportError> {
        Self::builder().build()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_chart(&self) -> &Url {
        &self.base_chart
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct ReportClientBuilder {
    user_agent: Option<String>,
    base_chart: Option<Url>,
    base_news: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl ReportClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the chart API base (e.g., `https://query1.finance.yahoo.com/v8/finance/chart/`).
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Override the news base (e.g., `https://news.google.com/`). `rss/search` is joined onto it.
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Set the per-request timeout. Default: 20 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<ReportClient, ReportError> {
        let base_chart = match self.base_chart {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_CHART)?,
        };
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(ReportClient {
            http,
            base_chart,
            base_news,
        })
    }
}
