//! Headlines scraped from the anchors of a single HTML news page.

use scraper::{Html, Selector};
use url::Url;

use crate::core::{
    HeadlineSource, NewsLocale, RawHeadline, ReportClient, ReportError, SourceFuture, net,
};

/// Anchor text shorter than this is navigation, not a headline.
const DEFAULT_MIN_TITLE_CHARS: usize = 8;

/// A [`HeadlineSource`] whose query is the URL of a listing page.
///
/// Every `<a>` with non-trivial text and an `href` containing one of the configured
/// keywords becomes a headline. Root-relative links are resolved against `link_base`
/// when set, otherwise against the page URL.
#[derive(Debug, Clone)]
pub struct PageHeadlines {
    client: ReportClient,
    keywords: Vec<String>,
    link_base: Option<Url>,
    min_title_chars: usize,
}

impl PageHeadlines {
    pub fn new(client: &ReportClient) -> Self {
        Self {
            client: client.clone(),
            keywords: Vec::new(),
            link_base: None,
            min_title_chars: DEFAULT_MIN_TITLE_CHARS,
        }
    }

    /// Only keep links whose `href` contains at least one of these substrings.
    /// An empty list keeps every link.
    #[must_use]
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Resolve root-relative links against this origin instead of the page URL.
    #[must_use]
    pub fn link_base(mut self, base: Url) -> Self {
        self.link_base = Some(base);
        self
    }

    #[must_use]
    pub fn min_title_chars(mut self, n: usize) -> Self {
        self.min_title_chars = n;
        self
    }

    /// Fetches `page` and extracts its headline anchors in document order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(&self, page: &str) -> Result<Vec<RawHeadline>, ReportError> {
        let page_url = Url::parse(page)?;
        let body = net::get_text(self.client.http(), page_url.clone(), "page", page, "html").await?;
        let base = self.link_base.as_ref().unwrap_or(&page_url);
        self.extract(&body, base)
    }

    pub(crate) fn extract(&self, html: &str, base: &Url) -> Result<Vec<RawHeadline>, ReportError> {
        let doc = Html::parse_document(html);
        let anchors =
            Selector::parse("a").map_err(|e| ReportError::Data(format!("selector: {e:?}")))?;

        let mut out = Vec::new();
        for a in doc.select(&anchors) {
            let text = a
                .text()
                .map(str::trim)
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            if text.chars().count() < self.min_title_chars {
                continue;
            }
            let Some(href) = a.value().attr("href").map(str::trim) else {
                continue;
            };
            if href.is_empty() {
                continue;
            }
            let link = if href.starts_with('/') {
                match base.join(href) {
                    Ok(u) => u.to_string(),
                    Err(_) => continue,
                }
            } else {
                href.to_string()
            };
            if !self.keywords.is_empty() && !self.keywords.iter().any(|k| link.contains(k.as_str())) {
                continue;
            }
            out.push(RawHeadline::new(text, link));
        }
        Ok(out)
    }
}

impl HeadlineSource for PageHeadlines {
    fn headlines<'a>(
        &'a self,
        query: &'a str,
        _locale: &'a NewsLocale,
    ) -> SourceFuture<'a, Vec<RawHeadline>> {
        Box::pin(self.fetch(query))
    }
}
