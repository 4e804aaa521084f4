//! Report definitions consumed by the snapshot builder.
//!
//! A [`ReportConfig`] names everything one run needs: what to fetch, how to shape it,
//! which timezone to display it in and where to write it. Built-in definitions live in
//! [`crate::presets`]; the same shape can be loaded from a JSON file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::{NewsLocale, ReportError, SeriesRequest};
use crate::snapshot::aggregate::SummaryStyle;
use crate::snapshot::normalize::{Precision, TrendLabel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    /// Short identifier used on the command line (e.g., `market`).
    pub name: String,
    /// Output file, relative to the output directory unless absolute.
    pub output: PathBuf,
    /// Display timezone for `updatedAt` and trend labels.
    pub timezone: Tz,
    pub spec: ReportSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ReportSpec {
    Quotes(QuotesSpec),
    Asset(AssetSpec),
    Headlines(HeadlinesSpec),
}

/// Static metadata for one instrument in a watch list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDef {
    pub label: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl AssetDef {
    pub fn new(label: impl Into<String>, symbol: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            symbol: symbol.into(),
            kind: kind.into(),
        }
    }
}

/// What a quote's change is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum Baseline {
    /// The point right before the latest one in the same series.
    PriorPoint,
    /// The previous session's close, taken from a second (daily) series.
    PriorSessionClose { series: SeriesRequest },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotesSpec {
    #[serde(default)]
    pub market: Option<String>,
    pub assets: Vec<AssetDef>,
    pub series: SeriesRequest,
    pub trend_len: usize,
    pub trend_label: TrendLabel,
    #[serde(default)]
    pub precision: Precision,
    #[serde(default = "default_baseline")]
    pub baseline: Baseline,
    /// Look up each symbol's currency.
    #[serde(default)]
    pub include_currency: bool,
    /// Used when the currency lookup yields nothing.
    #[serde(default)]
    pub currency_default: Option<String>,
}

fn default_baseline() -> Baseline {
    Baseline::PriorPoint
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSpec {
    pub symbol: String,
    pub series: SeriesRequest,
    pub trend_len: usize,
    pub trend_label: TrendLabel,
    pub performance_len: usize,
    #[serde(default)]
    pub precision: Precision,
}

/// Where a headline report's queries are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HeadlineOrigin {
    /// Google News RSS search; queries are search terms.
    GoogleNews,
    /// Anchor scrape; queries are page URLs.
    Page {
        #[serde(default)]
        keywords: Vec<String>,
        #[serde(default)]
        link_base: Option<Url>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSpec {
    pub name: String,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub locale: NewsLocale,
    pub queries: Vec<String>,
    /// Maximum headlines kept after dedup.
    pub cap: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlinesSpec {
    pub origin: HeadlineOrigin,
    /// Shown as `source` in the report.
    #[serde(default)]
    pub source: Option<String>,
    pub sections: Vec<SectionSpec>,
    #[serde(default)]
    pub summary: SummaryStyle,
    /// Reuse the previous snapshot's items for a section that came back empty.
    #[serde(default = "default_true")]
    pub fallback: bool,
}

fn default_true() -> bool {
    true
}

impl ReportConfig {
    /// Rejects definitions that could never produce a meaningful report.
    pub fn validate(&self) -> Result<(), ReportError> {
        let bad = |msg: String| Err(ReportError::Config(format!("{}: {msg}", self.name)));
        if self.name.trim().is_empty() {
            return Err(ReportError::Config("report name must not be empty".into()));
        }
        if self.output.as_os_str().is_empty() {
            return bad("output path must not be empty".into());
        }
        match &self.spec {
            ReportSpec::Quotes(q) => {
                if q.assets.is_empty() {
                    return bad("at least one asset is required".into());
                }
                if let Some(a) = q.assets.iter().find(|a| a.symbol.trim().is_empty()) {
                    return bad(format!("asset '{}' has an empty symbol", a.label));
                }
            }
            ReportSpec::Asset(a) => {
                if a.symbol.trim().is_empty() {
                    return bad("symbol must not be empty".into());
                }
            }
            ReportSpec::Headlines(h) => {
                if h.sections.is_empty() {
                    return bad("at least one section is required".into());
                }
                let mut names = HashSet::new();
                for s in &h.sections {
                    if !names.insert(s.name.as_str()) {
                        return bad(format!("duplicate section '{}'", s.name));
                    }
                    if s.cap == 0 {
                        return bad(format!("section '{}' has a zero cap", s.name));
                    }
                    if s.queries.is_empty() {
                        return bad(format!("section '{}' has no queries", s.name));
                    }
                }
            }
        }
        Ok(())
    }

    /// The output file resolved against `out_dir`.
    pub fn output_path(&self, out_dir: &Path) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            out_dir.join(&self.output)
        }
    }

    /// Same report, displayed in another timezone.
    #[must_use]
    pub fn with_timezone(mut self, tz: Tz) -> Self {
        self.timezone = tz;
        self
    }
}

/// Reads a JSON array of report definitions and validates each one.
pub fn load_configs(path: &Path) -> Result<Vec<ReportConfig>, ReportError> {
    let text = std::fs::read_to_string(path)?;
    let configs: Vec<ReportConfig> = serde_json::from_str(&text)?;
    for c in &configs {
        c.validate()?;
    }
    Ok(configs)
}

/// Picks the reports a run should cover: every definition with `all`, otherwise the
/// named ones in the order given.
pub fn select_reports(
    defs: Vec<ReportConfig>,
    names: &[String],
    all: bool,
) -> Result<Vec<ReportConfig>, ReportError> {
    if all {
        return Ok(defs);
    }
    if names.is_empty() {
        return Err(ReportError::Config(
            "name at least one report or pass --all".into(),
        ));
    }
    names
        .iter()
        .map(|n| {
            defs.iter()
                .find(|d| &d.name == n)
                .cloned()
                .ok_or_else(|| ReportError::Config(format!("unknown report '{n}'")))
        })
        .collect()
}
