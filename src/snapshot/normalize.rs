//! Turning a raw close series into a quote.
//!
//! Values stay unrounded inside [`QuoteResult`]; rounding happens only when a result
//! is turned into one of the serialized report rows.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::PricePoint;
use crate::snapshot::report::{LatestQuote, PerformanceRow, TrendPoint};

/// Decimal places used when a value leaves the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precision {
    pub price: u32,
    pub percent: u32,
}

impl Precision {
    /// Two places for prices and percentages (daily views).
    pub const DAILY: Self = Self {
        price: 2,
        percent: 2,
    };
    /// Two places for prices, three for percentages (hourly and intraday views).
    pub const INTRADAY: Self = Self {
        price: 2,
        percent: 3,
    };

    pub fn price(self, v: Decimal) -> Decimal {
        round_dp(v, self.price)
    }

    pub fn percent(self, v: Decimal) -> Decimal {
        round_dp(v, self.percent)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DAILY
    }
}

fn round_dp(v: Decimal, dp: u32) -> Decimal {
    v.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// How a trend timestamp is rendered in the display timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrendLabel {
    /// `2024-01-02`
    Date,
    /// `13:45`
    Time,
    /// `01-02 13:45`
    DateTime,
}

impl TrendLabel {
    fn pattern(self) -> &'static str {
        match self {
            TrendLabel::Date => "%Y-%m-%d",
            TrendLabel::Time => "%H:%M",
            TrendLabel::DateTime => "%m-%d %H:%M",
        }
    }

    pub fn format(self, ts: DateTime<Utc>, tz: Tz) -> String {
        ts.with_timezone(&tz).format(self.pattern()).to_string()
    }
}

/// A normalized quote. `change` and `change_percent` are always derived from
/// `price` and `previous` and cannot be set on their own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuoteResult {
    price: Option<Decimal>,
    previous: Option<Decimal>,
    change: Option<Decimal>,
    change_percent: Option<Decimal>,
    currency: Option<String>,
    trend: Vec<PricePoint>,
}

impl QuoteResult {
    /// The quote of a symbol with no data: every numeric field absent, empty trend.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a quote from a close series ordered oldest first.
    ///
    /// `price` is the last point and `previous` the one right before it by position.
    /// `trend` keeps the most recent `trend_len` points.
    pub fn from_series(series: &[PricePoint], trend_len: usize) -> Self {
        let price = series.last().map(|p| p.close);
        let previous = series.len().checked_sub(2).map(|i| series[i].close);
        let trend = series[series.len().saturating_sub(trend_len)..].to_vec();
        Self {
            trend,
            ..Self::default()
        }
        .priced(price, previous)
    }

    /// Replaces the comparison baseline (e.g., with the previous session's close) and
    /// re-derives the change fields.
    #[must_use]
    pub fn with_previous(self, previous: Option<Decimal>) -> Self {
        let price = self.price;
        self.priced(price, previous)
    }

    #[must_use]
    pub fn with_currency(mut self, currency: Option<String>) -> Self {
        self.currency = currency;
        self
    }

    fn priced(mut self, price: Option<Decimal>, previous: Option<Decimal>) -> Self {
        let (change, change_percent) = derive_change(price, previous);
        self.price = price;
        self.previous = previous;
        self.change = change;
        self.change_percent = change_percent;
        self
    }

    pub fn price(&self) -> Option<Decimal> {
        self.price
    }
    pub fn previous(&self) -> Option<Decimal> {
        self.previous
    }
    pub fn change(&self) -> Option<Decimal> {
        self.change
    }
    pub fn change_percent(&self) -> Option<Decimal> {
        self.change_percent
    }
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }
    pub fn trend(&self) -> &[PricePoint] {
        &self.trend
    }

    pub fn has_data(&self) -> bool {
        self.price.is_some()
    }

    /// Rounded price and change fields.
    pub fn latest(&self, precision: Precision) -> LatestQuote {
        LatestQuote {
            price: self.price.map(|v| precision.price(v)),
            change: self.change.map(|v| precision.price(v)),
            change_percent: self.change_percent.map(|v| precision.percent(v)),
        }
    }

    /// The trend window as labelled, rounded display points.
    pub fn trend_points(&self, label: TrendLabel, tz: Tz, precision: Precision) -> Vec<TrendPoint> {
        self.trend
            .iter()
            .map(|p| TrendPoint {
                time: label.format(p.timestamp, tz),
                close: precision.price(p.close),
            })
            .collect()
    }
}

/// `change = price - previous`; `change% = change / previous * 100` unless `previous` is zero.
pub fn derive_change(
    price: Option<Decimal>,
    previous: Option<Decimal>,
) -> (Option<Decimal>, Option<Decimal>) {
    let (Some(price), Some(previous)) = (price, previous) else {
        return (None, None);
    };
    let change = price - previous;
    let pct = if previous.is_zero() {
        None
    } else {
        change
            .checked_div(previous)
            .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
    };
    (Some(change), pct)
}

/// Baseline from a daily series: the second-to-last close, or the only close if there is one.
pub fn previous_session_close(daily: &[PricePoint]) -> Option<Decimal> {
    match daily.len() {
        0 => None,
        1 => Some(daily[0].close),
        n => Some(daily[n - 2].close),
    }
}

/// Per-point performance over the last `len` points; each row compares against the
/// row before it, so the first row has no change.
pub fn performance_rows(
    series: &[PricePoint],
    len: usize,
    label: TrendLabel,
    tz: Tz,
    precision: Precision,
) -> Vec<PerformanceRow> {
    let window = &series[series.len().saturating_sub(len)..];
    let mut last: Option<Decimal> = None;
    window
        .iter()
        .map(|p| {
            let (change, pct) = derive_change(Some(p.close), last);
            last = Some(p.close);
            PerformanceRow {
                time: label.format(p.timestamp, tz),
                price: precision.price(p.close),
                change: change.map(|v| precision.price(v)),
                change_percent: pct.map(|v| precision.percent(v)),
            }
        })
        .collect()
}
