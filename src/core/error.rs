use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum ReportError {
    /// An error occurred during an HTTP request (including timeouts).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from a source was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A JSON document (API payload or snapshot file) could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An RSS feed was not well-formed XML.
    #[error("XML error: {0}")]
    Xml(String),

    /// Reading or writing a snapshot file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A report configuration is invalid (unknown report, bad timezone, empty symbol list...).
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<roxmltree::Error> for ReportError {
    fn from(e: roxmltree::Error) -> Self {
        ReportError::Xml(e.to_string())
    }
}
