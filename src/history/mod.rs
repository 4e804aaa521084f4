//! Close-price series from the Yahoo v8 chart endpoint.

mod fetch;
mod wire;

use serde::Serialize;

use crate::core::{
    Interval, PricePoint, QuoteSource, Range, ReportClient, ReportError, SeriesRequest,
    SourceFuture,
};
use fetch::{assemble_points, fetch_chart};

/// Chart metadata that travels alongside the series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryMeta {
    /// ISO currency code of the instrument (e.g., `USD`, `TWD`).
    pub currency: Option<String>,
    /// IANA timezone of the listing exchange.
    pub timezone: Option<String>,
    /// Exchange offset from UTC in seconds.
    pub gmtoffset: Option<i64>,
}

/// Full result of a chart request: the cleaned series plus metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryResponse {
    pub points: Vec<PricePoint>,
    pub meta: Option<HistoryMeta>,
}

/// A builder for fetching a close-price series for a single symbol.
#[derive(Clone)]
pub struct HistoryBuilder {
    client: ReportClient,
    symbol: String,
    range: Range,
    interval: Interval,
    include_prepost: bool,
}

impl HistoryBuilder {
    /// Creates a new `HistoryBuilder` for a given symbol (default: `1mo` of `1d` closes).
    pub fn new(client: &ReportClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            range: Range::M1,
            interval: Interval::D1,
            include_prepost: false,
        }
    }

    /// Sets the lookback window for the request (e.g., `1mo`, `7d`).
    pub fn range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    /// Sets the granularity of each point.
    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Sets whether to include pre-market and post-market points for intraday intervals. (Default: `false`)
    pub fn prepost(mut self, yes: bool) -> Self {
        self.include_prepost = yes;
        self
    }

    /// Executes the request and returns only the close series.
    ///
    /// An unknown or delisted symbol yields an empty series.
    pub async fn fetch(self) -> Result<Vec<PricePoint>, ReportError> {
        let resp = self.fetch_full().await?;
        Ok(resp.points)
    }

    /// Executes the request and returns the series together with chart metadata.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch_full(self) -> Result<HistoryResponse, ReportError> {
        let fetched = fetch_chart(
            &self.client,
            &self.symbol,
            self.range,
            self.interval,
            self.include_prepost,
        )
        .await?;

        let points = assemble_points(&fetched.ts, &fetched.close);

        let meta = fetched.meta.map(|m| HistoryMeta {
            currency: m.currency,
            timezone: m.exchange_timezone_name,
            gmtoffset: m.gmtoffset,
        });

        Ok(HistoryResponse { points, meta })
    }
}

impl QuoteSource for ReportClient {
    fn price_series<'a>(
        &'a self,
        symbol: &'a str,
        req: SeriesRequest,
    ) -> SourceFuture<'a, Vec<PricePoint>> {
        Box::pin(async move {
            HistoryBuilder::new(self, symbol)
                .range(req.range)
                .interval(req.interval)
                .fetch()
                .await
        })
    }

    fn currency<'a>(&'a self, symbol: &'a str) -> SourceFuture<'a, Option<String>> {
        Box::pin(async move {
            let resp = HistoryBuilder::new(self, symbol)
                .range(Range::D1)
                .interval(Interval::D1)
                .fetch_full()
                .await?;
            Ok(resp.meta.and_then(|m| m.currency))
        })
    }
}
