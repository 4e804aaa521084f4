use std::str::FromStr;

use chrono::DateTime;
use rust_decimal::Decimal;

use crate::core::{Interval, PricePoint, Range, ReportClient, ReportError, net};
use crate::history::wire::{ChartEnvelope, MetaNode};

/// Yahoo's chart error code for unknown or delisted symbols.
const NOT_FOUND: &str = "Not Found";

pub(crate) struct Fetched {
    pub(crate) ts: Vec<i64>,
    pub(crate) close: Vec<Option<f64>>,
    pub(crate) meta: Option<MetaNode>,
}

impl Fetched {
    fn empty() -> Self {
        Self {
            ts: Vec::new(),
            close: Vec::new(),
            meta: None,
        }
    }
}

pub(crate) async fn fetch_chart(
    client: &ReportClient,
    symbol: &str,
    range: Range,
    interval: Interval,
    include_prepost: bool,
) -> Result<Fetched, ReportError> {
    let mut url = client.base_chart().join(symbol)?;
    url.query_pairs_mut()
        .append_pair("range", range.as_str())
        .append_pair("interval", interval.as_str())
        .append_pair(
            "includePrePost",
            if include_prepost { "true" } else { "false" },
        );

    let body = match net::get_text(client.http(), url, "history_chart", symbol, "json").await {
        Ok(body) => body,
        Err(ReportError::Status { status: 404, .. }) => return Ok(Fetched::empty()),
        Err(e) => return Err(e),
    };

    decode_chart(&body)
}

pub(crate) fn decode_chart(body: &str) -> Result<Fetched, ReportError> {
    let parsed: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| ReportError::Data(format!("json parse error: {e}")))?;

    let chart = parsed
        .chart
        .ok_or_else(|| ReportError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        if err.code == NOT_FOUND {
            return Ok(Fetched::empty());
        }
        return Err(ReportError::Data(format!(
            "yahoo error: {} - {}",
            err.code, err.description
        )));
    }

    let Some(r0) = chart.result.and_then(|mut r| r.pop()) else {
        return Ok(Fetched::empty());
    };

    let close = r0
        .indicators
        .and_then(|i| i.quote.into_iter().next())
        .map(|q| q.close)
        .unwrap_or_default();

    Ok(Fetched {
        ts: r0.timestamp.unwrap_or_default(),
        close,
        meta: r0.meta,
    })
}

/// Pairs timestamps with closes, dropping rows where the close is null or not finite.
pub(crate) fn assemble_points(ts: &[i64], close: &[Option<f64>]) -> Vec<PricePoint> {
    let mut out: Vec<PricePoint> = ts
        .iter()
        .zip(close.iter())
        .filter_map(|(&t, c)| {
            let timestamp = DateTime::from_timestamp(t, 0)?;
            let close = f64_to_decimal((*c)?)?;
            Some(PricePoint::new(timestamp, close))
        })
        .collect();
    out.sort_by_key(|p| p.timestamp);
    out
}

/// Converts through the shortest round-trip decimal text so `102.5_f64` becomes exactly `102.5`.
pub(crate) fn f64_to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string()).ok()
}
