#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::{fs, str::FromStr};

use chrono::{DateTime, Utc};
use httpmock::{Method::GET, Mock, MockServer};
use rust_decimal::Decimal;
use stock_report::core::SourceFuture;
use stock_report::{
    HeadlineSource, Interval, NewsLocale, PricePoint, QuoteSource, RawHeadline, ReportClient,
    ReportError, SeriesRequest,
};
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, key, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A client whose chart and news bases both point at the mock server.
pub fn client_for(server: &MockServer) -> ReportClient {
    ReportClient::builder()
        .base_chart(Url::parse(&format!("{}/v8/finance/chart/", server.base_url())).unwrap())
        .base_news(Url::parse(&format!("{}/", server.base_url())).unwrap())
        .build()
        .unwrap()
}

pub fn mock_history_chart<'a>(server: &'a MockServer, symbol: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v8/finance/chart/{}", symbol));
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("history_chart", symbol, "json"));
    })
}

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

/// Daily points starting at 2024-01-02 14:30 UTC, one per close.
pub fn daily(closes: &[&str]) -> Vec<PricePoint> {
    spaced(closes, ts("2024-01-02T14:30:00Z"), chrono::Duration::days(1))
}

/// Hourly points starting at 2024-01-02 00:00 UTC, one per close.
pub fn hourly(closes: &[&str]) -> Vec<PricePoint> {
    spaced(closes, ts("2024-01-02T00:00:00Z"), chrono::Duration::hours(1))
}

fn spaced(closes: &[&str], start: DateTime<Utc>, step: chrono::Duration) -> Vec<PricePoint> {
    closes
        .iter()
        .enumerate()
        .map(|(i, c)| PricePoint::new(start + step * i as i32, dec(c)))
        .collect()
}

/* ----- in-memory sources ----- */

/// Series keyed by symbol and interval; symbols in `failing` return an error.
#[derive(Default)]
pub struct FakeQuotes {
    series: HashMap<(String, Interval), Vec<PricePoint>>,
    failing: HashSet<String>,
    currencies: HashMap<String, String>,
    currency_down: bool,
}

impl FakeQuotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, symbol: &str, interval: Interval, points: Vec<PricePoint>) -> Self {
        self.series.insert((symbol.to_string(), interval), points);
        self
    }

    pub fn failing(mut self, symbol: &str) -> Self {
        self.failing.insert(symbol.to_string());
        self
    }

    pub fn with_currency(mut self, symbol: &str, currency: &str) -> Self {
        self.currencies
            .insert(symbol.to_string(), currency.to_string());
        self
    }

    pub fn currency_down(mut self) -> Self {
        self.currency_down = true;
        self
    }
}

impl QuoteSource for FakeQuotes {
    fn price_series<'a>(
        &'a self,
        symbol: &'a str,
        req: SeriesRequest,
    ) -> SourceFuture<'a, Vec<PricePoint>> {
        Box::pin(async move {
            if self.failing.contains(symbol) {
                return Err(ReportError::Data("boom".into()));
            }
            Ok(self
                .series
                .get(&(symbol.to_string(), req.interval))
                .cloned()
                .unwrap_or_default())
        })
    }

    fn currency<'a>(&'a self, symbol: &'a str) -> SourceFuture<'a, Option<String>> {
        Box::pin(async move {
            if self.currency_down {
                return Err(ReportError::Data("currency endpoint down".into()));
            }
            Ok(self.currencies.get(symbol).cloned())
        })
    }
}

enum Canned {
    Items(Vec<RawHeadline>),
    Fail(String),
}

/// Headlines keyed by query. Unknown queries return nothing.
#[derive(Default)]
pub struct FakeHeadlines {
    answers: HashMap<String, Canned>,
}

impl FakeHeadlines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, query: &str, items: Vec<RawHeadline>) -> Self {
        self.answers.insert(query.to_string(), Canned::Items(items));
        self
    }

    pub fn fail(mut self, query: &str, msg: &str) -> Self {
        self.answers
            .insert(query.to_string(), Canned::Fail(msg.to_string()));
        self
    }
}

impl HeadlineSource for FakeHeadlines {
    fn headlines<'a>(
        &'a self,
        query: &'a str,
        _locale: &'a NewsLocale,
    ) -> SourceFuture<'a, Vec<RawHeadline>> {
        Box::pin(async move {
            match self.answers.get(query) {
                Some(Canned::Items(items)) => Ok(items.clone()),
                Some(Canned::Fail(msg)) => Err(ReportError::Data(msg.clone())),
                None => Ok(Vec::new()),
            }
        })
    }
}

pub fn headline(title: &str, link: &str) -> RawHeadline {
    RawHeadline::new(title, link)
}
