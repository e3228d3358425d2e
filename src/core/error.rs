use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum YfError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body was not valid JSON for the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the API was in an unexpected format.
    #[error("Data format unexpected: {0}")]
    Data(String),

    /// A section the caller relies on was absent from the response.
    #[error("Missing data: {0}")]
    MissingData(String),

    /// Cookie or crumb acquisition failed.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Caller-supplied input was rejected before any request was made.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// The profile for the symbol carried no recognizable company name.
    #[error("No company data found for symbol {0}")]
    UnresolvedSymbol(String),
}
