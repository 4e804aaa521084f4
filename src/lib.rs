//! stock-report: scheduled market-quote and headline snapshots.
//!
//! Each report is one run of a single parameterized pipeline: fetch a fixed list of
//! symbols or queries, normalize what came back, and overwrite a JSON snapshot on disk.
//! Partial upstream failure never aborts a run; it shows up in the report's `errors`.
//!
//! ```no_run
//! # async fn demo() -> Result<(), stock_report::ReportError> {
//! let client = stock_report::ReportClient::new()?;
//! let config = stock_report::presets::market();
//! let report = stock_report::run_report(&client, &config, std::path::Path::new("data")).await?;
//! println!("ok = {}", report.ok);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod history;
pub mod news;
pub mod page;
pub mod presets;
pub mod snapshot;

pub use crate::config::{ReportConfig, ReportSpec};
pub use crate::core::{
    HeadlineSource, Interval, NewsLocale, PricePoint, QuoteSource, Range, RawHeadline,
    ReportClient, ReportClientBuilder, ReportError, SeriesRequest,
};
pub use crate::history::{HistoryBuilder, HistoryMeta, HistoryResponse};
pub use crate::news::NewsBuilder;
pub use crate::page::PageHeadlines;
pub use crate::snapshot::{Report, SnapshotBuilder, SnapshotSink, run_report};
