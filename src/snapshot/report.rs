//! The serialized snapshot document.
//!
//! Every type here round-trips through `serde_json`: the previous run's file is read
//! back as a `Report` when a headline run needs to fall back.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One point-in-time snapshot written by a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// RFC 3339 timestamp in the display timezone, seconds precision.
    pub updated_at: String,
    /// IANA name of the display timezone (e.g., `Asia/Taipei`).
    pub timezone: String,
    #[serde(flatten)]
    pub content: ReportContent,
    /// `true` iff at least one item or headline carries data.
    pub ok: bool,
    /// Per-item failures recorded during the run; `null` when there were none.
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

impl Report {
    /// Serializes with two-space indentation and a trailing newline. Non-ASCII text is
    /// written as-is.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        let mut s = serde_json::to_string_pretty(self)?;
        s.push('\n');
        Ok(s)
    }

    /// The section named `name`, if this is a headline report that has one.
    pub fn section(&self, name: &str) -> Option<&HeadlineSection> {
        match &self.content {
            ReportContent::Headlines { sections, .. } => sections.iter().find(|s| s.name == name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ReportContent {
    /// A watch list of instruments.
    Quotes {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        market: Option<String>,
        items: Vec<QuoteItem>,
    },
    /// A single instrument with a long trend and per-point performance rows.
    Asset {
        asset: String,
        latest: LatestQuote,
        trend: Vec<TrendPoint>,
        performance: Vec<PerformanceRow>,
    },
    /// Headlines, grouped into sections (one per language edition or feed).
    Headlines {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<String>,
        summary: String,
        sections: Vec<HeadlineSection>,
        /// Every section's items, concatenated in section order.
        news: Vec<Headline>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteItem {
    pub label: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: Option<Decimal>,
    pub change: Option<Decimal>,
    pub change_percent: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub trend: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestQuote {
    pub price: Option<Decimal>,
    pub change: Option<Decimal>,
    pub change_percent: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Display label in the report timezone (`2024-01-02`, `13:45`, `01-02 13:00`).
    pub time: String,
    pub close: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRow {
    pub time: String,
    pub price: Decimal,
    pub change: Option<Decimal>,
    pub change_percent: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineSection {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub items: Vec<Headline>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}
