//! Centralized constants for default endpoints, UA and timeouts.

use std::time::Duration;

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Yahoo chart API base (symbol is appended).
pub(crate) const DEFAULT_BASE_CHART: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";

/// Google News base; the RSS search path is joined onto it.
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://news.google.com/";

/// Per-request timeout. A hung call delays the run by at most this much.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);
