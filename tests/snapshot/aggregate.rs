use stock_report::snapshot::aggregate::{SummaryStyle, collect, normalize_and_dedupe, summarize};
use stock_report::snapshot::report::Headline;
use stock_report::NewsLocale;

use crate::common::{FakeHeadlines, headline};

fn queries(q: &[&str]) -> Vec<String> {
    q.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn failed_query_is_recorded_and_the_rest_continue() {
    let source = FakeHeadlines::new()
        .fail("A", "boom")
        .answer("B", vec![headline("Foo  Bar", "https://x/1")]);

    let collected = collect(&source, &queries(&["A", "B"]), &NewsLocale::en_us()).await;

    assert_eq!(
        collected.errors,
        vec!["A: Data format unexpected or missing field: boom".to_string()]
    );
    let news = normalize_and_dedupe(collected.items, None);
    assert_eq!(news.len(), 1);
    assert_eq!(news[0].title, "Foo Bar");
    assert_eq!(news[0].url, "https://x/1");
}

#[tokio::test]
async fn collect_keeps_query_order() {
    let source = FakeHeadlines::new()
        .answer("first", vec![headline("one", "u1"), headline("two", "u2")])
        .answer("second", vec![headline("three", "u3")]);

    let collected = collect(&source, &queries(&["first", "second"]), &NewsLocale::en_us()).await;

    let titles: Vec<_> = collected.items.iter().map(|h| h.title.as_str()).collect();
    assert_eq!(titles, vec!["one", "two", "three"]);
    assert!(collected.errors.is_empty());
}

#[test]
fn dedupe_on_lowercased_title_and_url_keeps_first() {
    let items = vec![
        headline("Coffee Rally", "https://a/1").with_description("first"),
        headline("coffee   rally", "https://a/1").with_description("second"),
        headline("Coffee Rally", "https://b/2"),
        headline("Other", "https://a/1"),
    ];

    let out = normalize_and_dedupe(items, Some("en"));

    let pairs: Vec<_> = out.iter().map(|h| (h.title.as_str(), h.url.as_str())).collect();
    assert_eq!(
        pairs,
        vec![
            ("Coffee Rally", "https://a/1"),
            ("Coffee Rally", "https://b/2"),
            ("Other", "https://a/1"),
        ]
    );
    assert_eq!(out[0].description.as_deref(), Some("first"));
    assert!(out.iter().all(|h| h.lang.as_deref() == Some("en")));
}

#[test]
fn empty_titles_and_urls_are_dropped() {
    let items = vec![
        headline("<b></b>", "https://a/1"),
        headline("No link", "   "),
        headline("Kept", "https://a/2").with_description("&nbsp;"),
    ];

    let out = normalize_and_dedupe(items, None);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "Kept");
    assert_eq!(out[0].description, None);
    assert_eq!(out[0].lang, None);
}

#[test]
fn descriptions_are_cleaned_and_clipped() {
    let long = format!("<p>{}</p>", "x".repeat(500));
    let out = normalize_and_dedupe(vec![headline("T", "u").with_description(long)], None);

    let desc = out[0].description.as_deref().unwrap();
    assert_eq!(desc.chars().count(), 301);
    assert!(desc.ends_with('…'));
}

fn titled(titles: &[&str]) -> Vec<Headline> {
    titles
        .iter()
        .enumerate()
        .map(|(i, t)| Headline {
            title: t.to_string(),
            url: format!("https://x/{i}"),
            description: None,
            lang: None,
        })
        .collect()
}

#[test]
fn summary_lists_top_titles() {
    let style = SummaryStyle::default();
    assert_eq!(
        summarize(&titled(&["A", "B"]), &style),
        "Top headlines: 1. A; 2. B."
    );
    assert_eq!(
        summarize(&titled(&["A", "B", "C", "D", "E"]), &style),
        "Top headlines: 1. A; 2. B; 3. C."
    );
}

#[test]
fn summary_of_nothing_is_the_unavailable_message() {
    let style = SummaryStyle {
        unavailable: "暫無新聞".into(),
        ..SummaryStyle::default()
    };
    assert_eq!(summarize(&[], &style), "暫無新聞");
}

#[test]
fn summary_style_is_configurable() {
    let style = SummaryStyle {
        top: 2,
        prefix: "今日重點：".into(),
        separator: "；".into(),
        suffix: "。".into(),
        unavailable: String::new(),
    };
    assert_eq!(
        summarize(&titled(&["甲", "乙", "丙"]), &style),
        "今日重點：1. 甲；2. 乙。"
    );
}
