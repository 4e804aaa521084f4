use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/* ----- QUOTE SOURCE (shared by history/ and snapshot/) ----- */

/// One close of a price series. Series are ordered by `timestamp` ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: Decimal,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, close: Decimal) -> Self {
        Self { timestamp, close }
    }
}

/// Lookback window for a series request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Range {
    #[serde(rename = "1d")]
    D1,
    #[serde(rename = "5d")]
    D5,
    #[serde(rename = "7d")]
    D7,
    #[serde(rename = "1mo")]
    M1,
    #[serde(rename = "3mo")]
    M3,
    #[serde(rename = "6mo")]
    M6,
    #[serde(rename = "1y")]
    Y1,
    #[serde(rename = "ytd")]
    Ytd,
}

impl Range {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Range::D1 => "1d",
            Range::D5 => "5d",
            Range::D7 => "7d",
            Range::M1 => "1mo",
            Range::M3 => "3mo",
            Range::M6 => "6mo",
            Range::Y1 => "1y",
            Range::Ytd => "ytd",
        }
    }
}

/// Granularity of each point in a series request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1m")]
    I1m,
    #[serde(rename = "5m")]
    I5m,
    #[serde(rename = "15m")]
    I15m,
    #[serde(rename = "30m")]
    I30m,
    #[serde(rename = "1h")]
    I1h,
    #[serde(rename = "1d")]
    D1,
    #[serde(rename = "1wk")]
    W1,
}

impl Interval {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Interval::I1m => "1m",
            Interval::I5m => "5m",
            Interval::I15m => "15m",
            Interval::I30m => "30m",
            Interval::I1h => "1h",
            Interval::D1 => "1d",
            Interval::W1 => "1wk",
        }
    }
}

/* ----- HEADLINE SOURCE (shared by news/, page/ and snapshot/) ----- */

/// A headline exactly as the source delivered it, before cleaning or dedup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHeadline {
    pub title: String,
    pub link: String,
    pub description: Option<String>,
}

impl RawHeadline {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Google News edition parameters (`hl`, `gl`, `ceid`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsLocale {
    pub hl: String,
    pub gl: String,
    pub ceid: String,
}

impl NewsLocale {
    pub fn en_us() -> Self {
        Self {
            hl: "en-US".into(),
            gl: "US".into(),
            ceid: "US:en".into(),
        }
    }

    pub fn zh_tw() -> Self {
        Self {
            hl: "zh-TW".into(),
            gl: "TW".into(),
            ceid: "TW:zh-Hant".into(),
        }
    }
}

impl Default for NewsLocale {
    fn default() -> Self {
        Self::en_us()
    }
}
