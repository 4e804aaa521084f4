use httpmock::Method::GET;
use stock_report::{Interval, QuoteSource, Range, SeriesRequest};

use crate::common::{client_for, dec, fixture, setup_server};

#[tokio::test]
async fn client_serves_price_series() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("range", "5d")
            .query_param("interval", "1d");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("history_chart", "AAPL", "json"));
    });
    let client = client_for(&server);

    let series = client
        .price_series("AAPL", SeriesRequest::new(Range::D5, Interval::D1))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(series.last().map(|p| p.close), Some(dec("181.91")));
}

#[tokio::test]
async fn client_reads_currency_from_chart_meta() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("range", "1d")
            .query_param("interval", "1d");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("history_chart", "AAPL", "json"));
    });
    let client = client_for(&server);

    let currency = client.currency("AAPL").await.unwrap();

    mock.assert();
    assert_eq!(currency.as_deref(), Some("USD"));
}

#[tokio::test]
async fn currency_of_unknown_symbol_is_none() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/NOPE");
        then.status(404);
    });
    let client = client_for(&server);

    assert_eq!(client.currency("NOPE").await.unwrap(), None);
}
