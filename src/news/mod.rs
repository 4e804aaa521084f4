//! Google News RSS search.

mod api;
mod wire;

use crate::core::{
    HeadlineSource, NewsLocale, RawHeadline, ReportClient, ReportError, SourceFuture,
};

/// A builder for one Google News RSS search.
pub struct NewsBuilder {
    client: ReportClient,
    query: String,
    locale: NewsLocale,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a query, defaulting to the en-US edition.
    pub fn new(client: &ReportClient, query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into(),
            locale: NewsLocale::default(),
        }
    }

    /// Sets the Google News edition (`hl`/`gl`/`ceid`).
    #[must_use]
    pub fn locale(mut self, locale: NewsLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Executes the search and returns the raw feed items in feed order.
    ///
    /// # Errors
    ///
    /// Returns a `ReportError` on network failure, a non-2xx status, or a feed
    /// that is not well-formed RSS.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(query = %self.query)))]
    pub async fn fetch(self) -> Result<Vec<RawHeadline>, ReportError> {
        api::fetch_rss(&self.client, &self.query, &self.locale).await
    }
}

impl HeadlineSource for ReportClient {
    fn headlines<'a>(
        &'a self,
        query: &'a str,
        locale: &'a NewsLocale,
    ) -> SourceFuture<'a, Vec<RawHeadline>> {
        Box::pin(async move {
            NewsBuilder::new(self, query)
                .locale(locale.clone())
                .fetch()
                .await
        })
    }
}
