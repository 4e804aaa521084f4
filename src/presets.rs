//! Built-in report definitions.

use chrono_tz::Tz;
use url::Url;

use crate::config::{
    AssetDef, AssetSpec, Baseline, HeadlineOrigin, HeadlinesSpec, QuotesSpec, ReportConfig,
    ReportSpec, SectionSpec,
};
use crate::core::{Interval, NewsLocale, Range, SeriesRequest};
use crate::snapshot::aggregate::SummaryStyle;
use crate::snapshot::normalize::{Precision, TrendLabel};

/// Display timezone shared by every built-in report.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Taipei;

const TW_NEWS_PAGE: &str = "https://news.cnyes.com/news/cat/tw_stock_news";
const TW_NEWS_LINK_BASE: &str = "https://www.cnyes.com/";

/// Names accepted by [`by_name`], in display order.
pub const NAMES: [&str; 6] = [
    "market",
    "us-market",
    "btc-hourly",
    "coffee-news",
    "stories",
    "tw-news",
];

pub fn all() -> Vec<ReportConfig> {
    NAMES.iter().filter_map(|n| by_name(n)).collect()
}

pub fn by_name(name: &str) -> Option<ReportConfig> {
    match name {
        "market" => Some(market()),
        "us-market" => Some(us_market()),
        "btc-hourly" => Some(btc_hourly()),
        "coffee-news" => Some(coffee_news()),
        "stories" => Some(stories()),
        "tw-news" => Some(tw_news()),
        _ => None,
    }
}

fn report(name: &str, output: &str, spec: ReportSpec) -> ReportConfig {
    ReportConfig {
        name: name.into(),
        output: output.into(),
        timezone: DEFAULT_TIMEZONE,
        spec,
    }
}

/// Daily watch list: one month of daily closes, seven-day trend, currency.
pub fn market() -> ReportConfig {
    let assets = vec![
        AssetDef::new("TSM", "TSM", "Stock"),
        AssetDef::new("GOOG", "GOOG", "Stock"),
        AssetDef::new("AMD", "AMD", "Stock"),
        AssetDef::new("NVDA", "NVDA", "Stock"),
        AssetDef::new("BTC", "BTC-USD", "Crypto"),
        AssetDef::new("Tesla", "TSLA", "Stock"),
        AssetDef::new("Gold", "GC=F", "Commodity"),
        AssetDef::new("S&P 500", "^GSPC", "Index"),
        AssetDef::new("NASDAQ SOX", "^SOX", "Index"),
    ];
    report(
        "market",
        "latest.json",
        ReportSpec::Quotes(QuotesSpec {
            market: None,
            assets,
            series: SeriesRequest::new(Range::M1, Interval::D1),
            trend_len: 7,
            trend_label: TrendLabel::Date,
            precision: Precision::DAILY,
            baseline: Baseline::PriorPoint,
            include_currency: true,
            currency_default: None,
        }),
    )
}

/// US session: 15-minute bars for today against yesterday's close.
pub fn us_market() -> ReportConfig {
    let assets = vec![
        AssetDef::new("台積電ADR", "TSM", "Stock"),
        AssetDef::new("Google", "GOOG", "Stock"),
        AssetDef::new("AMD", "AMD", "Stock"),
        AssetDef::new("NVIDIA", "NVDA", "Stock"),
        AssetDef::new("Tesla", "TSLA", "Stock"),
        AssetDef::new("S&P 500", "^GSPC", "Index"),
        AssetDef::new("美國費城半導體指數", "^SOX", "Index"),
    ];
    report(
        "us-market",
        "us_latest.json",
        ReportSpec::Quotes(QuotesSpec {
            market: Some("US".into()),
            assets,
            series: SeriesRequest::new(Range::D1, Interval::I15m),
            trend_len: 24,
            trend_label: TrendLabel::Time,
            // Measured against the prior session close, so percentages read as daily ones.
            precision: Precision::DAILY,
            baseline: Baseline::PriorSessionClose {
                series: SeriesRequest::new(Range::D5, Interval::D1),
            },
            include_currency: false,
            currency_default: None,
        }),
    )
}

/// Hourly BTC: 72-hour trend plus 24 hourly performance rows.
pub fn btc_hourly() -> ReportConfig {
    report(
        "btc-hourly",
        "btc_latest.json",
        ReportSpec::Asset(AssetSpec {
            symbol: "BTC-USD".into(),
            series: SeriesRequest::new(Range::D7, Interval::I1h),
            trend_len: 72,
            trend_label: TrendLabel::DateTime,
            performance_len: 24,
            precision: Precision::INTRADAY,
        }),
    )
}

/// Coffee industry headlines from four English searches.
pub fn coffee_news() -> ReportConfig {
    report(
        "coffee-news",
        "coffee_news.json",
        ReportSpec::Headlines(HeadlinesSpec {
            origin: HeadlineOrigin::GoogleNews,
            source: Some("Google News".into()),
            sections: vec![SectionSpec {
                name: "main".into(),
                lang: None,
                locale: NewsLocale::en_us(),
                queries: strings(&[
                    "coffee industry",
                    "coffee prices",
                    "arabica futures",
                    "specialty coffee",
                ]),
                cap: 10,
            }],
            summary: SummaryStyle {
                top: 3,
                prefix: "今日咖啡新聞重點：".into(),
                separator: "；".into(),
                suffix: "。".into(),
                unavailable: "今日咖啡新聞暫時無法更新，請稍後再試。".into(),
            },
            fallback: true,
        }),
    )
}

/// Light reading in two editions, five stories each.
pub fn stories() -> ReportConfig {
    let zh = SectionSpec {
        name: "zh".into(),
        lang: Some("zh".into()),
        locale: NewsLocale::zh_tw(),
        queries: strings(&[
            "日常生活 有趣故事",
            "食衣住行 趨勢",
            "教育 新知",
            "科學 發現",
            "哲學 思辨",
            "自然 生態",
            "旅遊 文化",
            "休閒 娛樂",
        ]),
        cap: 5,
    };
    let en = SectionSpec {
        name: "en".into(),
        lang: Some("en".into()),
        locale: NewsLocale::en_us(),
        queries: strings(&[
            "daily life interesting stories",
            "food fashion housing transport trends",
            "education insights",
            "science discoveries",
            "philosophy ideas",
            "nature and ecology",
            "travel and culture",
            "leisure and entertainment",
        ]),
        cap: 5,
    };
    report(
        "stories",
        "interesting_stories.json",
        ReportSpec::Headlines(HeadlinesSpec {
            origin: HeadlineOrigin::GoogleNews,
            source: Some("Google News".into()),
            sections: vec![zh, en],
            summary: SummaryStyle {
                top: 2,
                ..SummaryStyle::default()
            },
            fallback: true,
        }),
    )
}

/// Taiwan stock headlines scraped from the cnyes listing page.
pub fn tw_news() -> ReportConfig {
    report(
        "tw-news",
        "tw_news.json",
        ReportSpec::Headlines(HeadlinesSpec {
            origin: HeadlineOrigin::Page {
                keywords: strings(&["news", "topic", "twstock"]),
                link_base: Url::parse(TW_NEWS_LINK_BASE).ok(),
            },
            source: Some(TW_NEWS_PAGE.into()),
            sections: vec![SectionSpec {
                name: "main".into(),
                lang: Some("zh".into()),
                locale: NewsLocale::zh_tw(),
                queries: vec![TW_NEWS_PAGE.into()],
                cap: 12,
            }],
            summary: SummaryStyle {
                top: 5,
                prefix: "今日台股新聞重點：".into(),
                separator: "；".into(),
                suffix: "。建議優先關注權值股、ETF 資金流向與政策面消息。".into(),
                unavailable: "目前無法抓取鉅亨網台股頁面內容，建議稍後再試。".into(),
            },
            fallback: true,
        }),
    )
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
