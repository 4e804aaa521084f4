use httpmock::Method::GET;
use stock_report::{HistoryBuilder, Interval, Range};

use crate::common::{client_for, fixture, setup_server};

#[tokio::test]
async fn history_sends_range_interval_and_prepost() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("range", "1d")
            .query_param("interval", "15m")
            .query_param("includePrePost", "true");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("history_chart", "AAPL", "json"));
    });
    let client = client_for(&server);

    let points = HistoryBuilder::new(&client, "AAPL")
        .range(Range::D1)
        .interval(Interval::I15m)
        .prepost(true)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert!(!points.is_empty());
}

#[tokio::test]
async fn history_defaults_to_one_month_of_daily_closes() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("range", "1mo")
            .query_param("interval", "1d")
            .query_param("includePrePost", "false");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("history_chart", "AAPL", "json"));
    });
    let client = client_for(&server);

    HistoryBuilder::new(&client, "AAPL").fetch().await.unwrap();
    mock.assert();
}
