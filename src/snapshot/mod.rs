//! The snapshot builder: normalize quotes, aggregate headlines, assemble and persist a report.

pub mod aggregate;
pub mod builder;
pub mod normalize;
pub mod report;
pub mod sink;
pub mod text;

use std::path::Path;

use crate::config::{HeadlineOrigin, ReportConfig, ReportSpec};
use crate::core::{ReportClient, ReportError};
use crate::page::PageHeadlines;

pub use builder::SnapshotBuilder;
pub use report::Report;
pub use sink::SnapshotSink;

/// Runs one report against the live sources and writes it under `out_dir`.
///
/// Quotes go through the Yahoo chart endpoint, headlines through Google News RSS or a
/// page scrape depending on the report's origin. Returns the written report.
pub async fn run_report(
    client: &ReportClient,
    config: &ReportConfig,
    out_dir: &Path,
) -> Result<Report, ReportError> {
    let sink = SnapshotSink::new(config.output_path(out_dir));

    match &config.spec {
        ReportSpec::Headlines(spec) => match &spec.origin {
            HeadlineOrigin::GoogleNews => {
                SnapshotBuilder::new(config, sink)
                    .headline_source(client)
                    .run()
                    .await
            }
            HeadlineOrigin::Page {
                keywords,
                link_base,
            } => {
                let mut page = PageHeadlines::new(client).keywords(keywords.iter().cloned());
                if let Some(base) = link_base {
                    page = page.link_base(base.clone());
                }
                SnapshotBuilder::new(config, sink)
                    .headline_source(&page)
                    .run()
                    .await
            }
        },
        ReportSpec::Quotes(_) | ReportSpec::Asset(_) => {
            SnapshotBuilder::new(config, sink)
                .quote_source(client)
                .run()
                .await
        }
    }
}
