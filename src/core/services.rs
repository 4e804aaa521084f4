use core::future::Future;
use core::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::core::{Interval, NewsLocale, PricePoint, Range, RawHeadline, ReportError};

/// Boxed future returned by the source traits.
pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ReportError>> + Send + 'a>>;

/// Parameters for a single price-series lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesRequest {
    /// How far back the series should reach (e.g., `1mo`).
    pub range: Range,
    /// Granularity of each point (e.g., `1d`, `15m`).
    pub interval: Interval,
}

impl SeriesRequest {
    pub const fn new(range: Range, interval: Interval) -> Self {
        Self { range, interval }
    }
}

/// A source of time-ordered close prices.
///
/// This is the seam the snapshot builder fetches quotes through. It is implemented
/// by [`ReportClient`](crate::ReportClient) against the Yahoo chart endpoint, and by
/// in-memory fakes in tests.
pub trait QuoteSource: Send + Sync {
    /// Fetches the close series for `symbol`, oldest first.
    ///
    /// Unknown or delisted symbols must resolve to an empty series, not an error.
    /// Errors are reserved for the source itself being unreachable or returning garbage.
    fn price_series<'a>(
        &'a self,
        symbol: &'a str,
        req: SeriesRequest,
    ) -> SourceFuture<'a, Vec<PricePoint>>;

    /// Looks up the trading currency for `symbol`.
    ///
    /// `Ok(None)` means the source does not know or does not provide the field;
    /// `Err` means the source could not be asked. The default implementation
    /// reports the field as unsupported.
    fn currency<'a>(&'a self, _symbol: &'a str) -> SourceFuture<'a, Option<String>> {
        Box::pin(async { Ok(None) })
    }
}

/// A source of headlines for a free-text query.
///
/// Implemented by [`ReportClient`](crate::ReportClient) (Google News RSS search) and
/// [`PageHeadlines`](crate::PageHeadlines) (anchor scrape of a single page, where the
/// query is the page URL).
pub trait HeadlineSource: Send + Sync {
    /// Fetches headlines for `query` in the given edition, in source order.
    fn headlines<'a>(
        &'a self,
        query: &'a str,
        locale: &'a NewsLocale,
    ) -> SourceFuture<'a, Vec<RawHeadline>>;
}
