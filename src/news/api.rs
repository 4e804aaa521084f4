use crate::core::{NewsLocale, RawHeadline, ReportClient, ReportError, net};
use crate::news::wire;

pub(super) async fn fetch_rss(
    client: &ReportClient,
    query: &str,
    locale: &NewsLocale,
) -> Result<Vec<RawHeadline>, ReportError> {
    let mut url = client.base_news().join("rss/search")?;
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("hl", &locale.hl)
        .append_pair("gl", &locale.gl)
        .append_pair("ceid", &locale.ceid);

    let body = net::get_text(client.http(), url, "news_rss", query, "xml").await?;
    wire::parse_rss(&body)
}
