use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;

use crate::config::{AssetSpec, Baseline, HeadlinesSpec, QuotesSpec, ReportConfig, ReportSpec};
use crate::core::{HeadlineSource, QuoteSource, ReportError};
use crate::snapshot::aggregate::{collect, normalize_and_dedupe, summarize};
use crate::snapshot::normalize::{QuoteResult, performance_rows, previous_session_close};
use crate::snapshot::report::{HeadlineSection, QuoteItem, Report, ReportContent};
use crate::snapshot::sink::SnapshotSink;

/// Assembles one [`Report`] from a [`ReportConfig`] and writes it through a [`SnapshotSink`].
///
/// Lookups run one after another. A failed lookup is recorded in the report's `errors`
/// and never aborts the batch; only the final write can fail the run.
pub struct SnapshotBuilder<'a> {
    config: &'a ReportConfig,
    sink: SnapshotSink,
    quotes: Option<&'a dyn QuoteSource>,
    headlines: Option<&'a dyn HeadlineSource>,
    now: Option<DateTime<Utc>>,
}

impl<'a> SnapshotBuilder<'a> {
    pub fn new(config: &'a ReportConfig, sink: SnapshotSink) -> Self {
        Self {
            config,
            sink,
            quotes: None,
            headlines: None,
            now: None,
        }
    }

    /// Source used by quote and asset reports.
    #[must_use]
    pub fn quote_source(mut self, source: &'a dyn QuoteSource) -> Self {
        self.quotes = Some(source);
        self
    }

    /// Source used by headline reports.
    #[must_use]
    pub fn headline_source(mut self, source: &'a dyn HeadlineSource) -> Self {
        self.headlines = Some(source);
        self
    }

    /// Pins the `updatedAt` stamp instead of reading the clock.
    #[must_use]
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Fetches everything and assembles the report without writing it.
    ///
    /// # Errors
    ///
    /// Only configuration problems (invalid definition, missing source) are errors here;
    /// upstream failures end up in `Report::errors`.
    pub async fn build(&self) -> Result<Report, ReportError> {
        self.config.validate()?;
        let tz = self.config.timezone;
        let now = self.now.unwrap_or_else(Utc::now);

        let (content, ok, errors) = match &self.config.spec {
            ReportSpec::Quotes(spec) => self.build_quotes(spec, self.quote_src()?, tz).await,
            ReportSpec::Asset(spec) => self.build_asset(spec, self.quote_src()?, tz).await,
            ReportSpec::Headlines(spec) => self.build_headlines(spec, self.headline_src()?).await,
        };

        #[cfg(feature = "tracing")]
        {
            if !errors.is_empty() {
                tracing::warn!(report = %self.config.name, failures = errors.len(), "report built with errors");
            }
        }

        Ok(Report {
            updated_at: now
                .with_timezone(&tz)
                .to_rfc3339_opts(SecondsFormat::Secs, false),
            timezone: tz.name().to_string(),
            content,
            ok,
            errors: (!errors.is_empty()).then_some(errors),
        })
    }

    /// Builds the report and overwrites the output file with it.
    ///
    /// # Errors
    ///
    /// Configuration problems, and any serialization or filesystem failure while writing.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(report = %self.config.name)))]
    pub async fn run(&self) -> Result<Report, ReportError> {
        let report = self.build().await?;
        self.sink.write(&report)?;
        Ok(report)
    }

    fn quote_src(&self) -> Result<&'a dyn QuoteSource, ReportError> {
        self.quotes.ok_or_else(|| {
            ReportError::Config(format!("{}: no quote source configured", self.config.name))
        })
    }

    fn headline_src(&self) -> Result<&'a dyn HeadlineSource, ReportError> {
        self.headlines.ok_or_else(|| {
            ReportError::Config(format!("{}: no headline source configured", self.config.name))
        })
    }

    async fn build_quotes(
        &self,
        spec: &QuotesSpec,
        src: &dyn QuoteSource,
        tz: Tz,
    ) -> (ReportContent, bool, Vec<String>) {
        let mut errors = Vec::new();
        let mut items = Vec::with_capacity(spec.assets.len());

        for asset in &spec.assets {
            let series = match src.price_series(&asset.symbol, spec.series).await {
                Ok(s) => s,
                Err(e) => {
                    errors.push(format!("{}: {e}", asset.symbol));
                    Vec::new()
                }
            };
            let mut quote = QuoteResult::from_series(&series, spec.trend_len);

            if let Baseline::PriorSessionClose { series: daily_req } = spec.baseline {
                let previous = match src.price_series(&asset.symbol, daily_req).await {
                    Ok(daily) => previous_session_close(&daily),
                    Err(e) => {
                        errors.push(format!("{}: {e}", asset.symbol));
                        None
                    }
                };
                quote = quote.with_previous(previous);
            }

            if spec.include_currency {
                let currency = match src.currency(&asset.symbol).await {
                    Ok(c) => c,
                    Err(_e) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(symbol = %asset.symbol, error = %_e, "currency lookup failed");
                        None
                    }
                };
                quote = quote.with_currency(currency.or_else(|| spec.currency_default.clone()));
            }

            let latest = quote.latest(spec.precision);
            items.push(QuoteItem {
                label: asset.label.clone(),
                symbol: asset.symbol.clone(),
                kind: asset.kind.clone(),
                price: latest.price,
                change: latest.change,
                change_percent: latest.change_percent,
                currency: quote.currency().map(str::to_string),
                trend: quote.trend_points(spec.trend_label, tz, spec.precision),
            });
        }

        let ok = items.iter().any(|i| i.price.is_some());
        let content = ReportContent::Quotes {
            market: spec.market.clone(),
            items,
        };
        (content, ok, errors)
    }

    async fn build_asset(
        &self,
        spec: &AssetSpec,
        src: &dyn QuoteSource,
        tz: Tz,
    ) -> (ReportContent, bool, Vec<String>) {
        let mut errors = Vec::new();
        let series = match src.price_series(&spec.symbol, spec.series).await {
            Ok(s) => s,
            Err(e) => {
                errors.push(format!("{}: {e}", spec.symbol));
                Vec::new()
            }
        };
        let quote = QuoteResult::from_series(&series, spec.trend_len);
        let content = ReportContent::Asset {
            asset: spec.symbol.clone(),
            latest: quote.latest(spec.precision),
            trend: quote.trend_points(spec.trend_label, tz, spec.precision),
            performance: performance_rows(
                &series,
                spec.performance_len,
                spec.trend_label,
                tz,
                spec.precision,
            ),
        };
        (content, quote.has_data(), errors)
    }

    async fn build_headlines(
        &self,
        spec: &HeadlinesSpec,
        src: &dyn HeadlineSource,
    ) -> (ReportContent, bool, Vec<String>) {
        // Read once, before any fetch, and only if it can be used.
        let previous = if spec.fallback { self.load_previous() } else { None };

        let mut errors = Vec::new();
        let mut sections = Vec::with_capacity(spec.sections.len());
        // With several sections the same query may appear twice; say which one failed.
        let tag_errors = spec.sections.len() > 1;

        for section in &spec.sections {
            let collected = collect(src, &section.queries, &section.locale).await;
            if tag_errors {
                errors.extend(
                    collected
                        .errors
                        .into_iter()
                        .map(|e| format!("{}:{e}", section.name)),
                );
            } else {
                errors.extend(collected.errors);
            }

            let mut items = normalize_and_dedupe(collected.items, section.lang.as_deref());
            items.truncate(section.cap);

            if items.is_empty()
                && let Some(prev) = previous.as_ref().and_then(|r| r.section(&section.name))
            {
                #[cfg(feature = "tracing")]
                tracing::info!(
                    report = %self.config.name,
                    section = %section.name,
                    reused = prev.items.len().min(section.cap),
                    "no fresh headlines, reusing previous snapshot"
                );
                items = prev.items.iter().take(section.cap).cloned().collect();
            }

            sections.push(HeadlineSection {
                name: section.name.clone(),
                lang: section.lang.clone(),
                items,
            });
        }

        let news: Vec<_> = sections.iter().flat_map(|s| s.items.iter().cloned()).collect();
        let ok = !news.is_empty();
        let content = ReportContent::Headlines {
            source: spec.source.clone(),
            summary: summarize(&news, &spec.summary),
            sections,
            news,
        };
        (content, ok, errors)
    }

    /// A previous file that cannot be read or parsed is treated as absent.
    fn load_previous(&self) -> Option<Report> {
        match self.sink.load_previous() {
            Ok(prev) => prev,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(path = %self.sink.path().display(), error = %_e, "ignoring unreadable previous snapshot");
                None
            }
        }
    }
}
