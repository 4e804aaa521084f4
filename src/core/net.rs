#[cfg(feature = "test-mode")]
use std::env;

use crate::core::ReportError;
use url::Url;

/// Issue a GET and return the body, mapping non-2xx responses to `ReportError::Status`.
/// In `test-mode`, if `SR_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_text(
    http: &reqwest::Client,
    url: Url,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<String, ReportError> {
    let resp = http.get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(ReportError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("SR_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, _ext, &text)
        {
            eprintln!("SR_RECORD: failed to write fixture for {_key}: {e}");
        }
    }

    Ok(text)
}
