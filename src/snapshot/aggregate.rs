//! Headline collection, cleanup, dedup and summary.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::{HeadlineSource, NewsLocale, RawHeadline};
use crate::snapshot::report::Headline;
use crate::snapshot::text::{DESCRIPTION_LIMIT, clean_text, clip};

/// Raw items gathered for one section, plus one error string per failed query.
#[derive(Debug, Default)]
pub struct Collected {
    pub items: Vec<RawHeadline>,
    pub errors: Vec<String>,
}

/// Issues every query in order. A failing query is recorded as `"<query>: <error>"`
/// and does not stop the others.
pub async fn collect(
    source: &dyn HeadlineSource,
    queries: &[String],
    locale: &NewsLocale,
) -> Collected {
    let mut out = Collected::default();
    for q in queries {
        match source.headlines(q, locale).await {
            Ok(items) => out.items.extend(items),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(query = %q, error = %e, "headline query failed");
                out.errors.push(format!("{q}: {e}"));
            }
        }
    }
    out
}

/// Cleans titles and descriptions and drops duplicates.
///
/// The dedup key is the lowercased clean title plus the exact URL; the first occurrence
/// wins and arrival order is preserved. Items whose title or URL is empty after
/// cleaning are dropped.
pub fn normalize_and_dedupe<I>(items: I, lang: Option<&str>) -> Vec<Headline>
where
    I: IntoIterator<Item = RawHeadline>,
{
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut out = Vec::new();
    for raw in items {
        let title = clean_text(&raw.title);
        let url = raw.link.trim().to_string();
        if title.is_empty() || url.is_empty() {
            continue;
        }
        if !seen.insert((title.to_lowercase(), url.clone())) {
            continue;
        }
        let description = raw
            .description
            .as_deref()
            .map(|d| clip(d, DESCRIPTION_LIMIT))
            .filter(|d| !d.is_empty());
        out.push(Headline {
            title,
            url,
            description,
            lang: lang.map(str::to_string),
        });
    }
    out
}

/// How the one-line summary is phrased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStyle {
    /// Number of leading titles included.
    pub top: usize,
    pub prefix: String,
    pub separator: String,
    pub suffix: String,
    /// Used verbatim when there are no headlines at all.
    pub unavailable: String,
}

impl Default for SummaryStyle {
    fn default() -> Self {
        Self {
            top: 3,
            prefix: "Top headlines: ".into(),
            separator: "; ".into(),
            suffix: ".".into(),
            unavailable: "Headlines are temporarily unavailable, please try again later.".into(),
        }
    }
}

/// `"<prefix>1. A<sep>2. B<suffix>"` over the first `style.top` titles.
pub fn summarize(headlines: &[Headline], style: &SummaryStyle) -> String {
    if headlines.is_empty() {
        return style.unavailable.clone();
    }
    let points = headlines
        .iter()
        .take(style.top.max(1))
        .enumerate()
        .map(|(i, h)| format!("{}. {}", i + 1, h.title))
        .collect::<Vec<_>>()
        .join(&style.separator);
    format!("{}{}{}", style.prefix, points, style.suffix)
}
