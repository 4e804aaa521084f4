use crate::common::{client_for, dec, mock_history_chart, setup_server, ts};
use stock_report::HistoryBuilder;

#[tokio::test]
async fn offline_history_drops_null_closes() {
    let server = setup_server();
    let mock = mock_history_chart(&server, "AAPL");
    let client = client_for(&server);

    let points = HistoryBuilder::new(&client, "AAPL").fetch().await.unwrap();

    mock.assert();
    assert_eq!(points.len(), 2, "the null close must be dropped");
    assert_eq!(points[0].timestamp, ts("2024-01-02T14:30:00Z"));
    assert_eq!(points[0].close, dec("185.64"));
    assert_eq!(points[1].timestamp, ts("2024-01-04T14:30:00Z"));
    assert_eq!(points[1].close, dec("181.91"));
}

#[tokio::test]
async fn offline_history_exposes_meta() {
    let server = setup_server();
    let _mock = mock_history_chart(&server, "AAPL");
    let client = client_for(&server);

    let resp = HistoryBuilder::new(&client, "AAPL")
        .fetch_full()
        .await
        .unwrap();

    let meta = resp.meta.expect("meta present");
    assert_eq!(meta.currency.as_deref(), Some("USD"));
    assert_eq!(meta.timezone.as_deref(), Some("America/New_York"));
    assert_eq!(meta.gmtoffset, Some(-18000));
}

#[tokio::test]
async fn points_come_back_sorted_by_time() {
    let server = setup_server();
    let body = r#"{"chart":{"result":[{"meta":{"currency":"USD"},
        "timestamp":[1704378600,1704205800,1704292200],
        "indicators":{"quote":[{"close":[3.0,1.0,2.0]}]}}],"error":null}}"#;
    let _mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/v8/finance/chart/SORT");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });
    let client = client_for(&server);

    let points = HistoryBuilder::new(&client, "SORT").fetch().await.unwrap();

    let closes: Vec<_> = points.iter().map(|p| p.close).collect();
    assert_eq!(closes, vec![dec("1"), dec("2"), dec("3")]);
    assert!(points.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
}
