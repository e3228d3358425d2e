use url::Url;

use crate::core::YfError;

/// Map a non-2xx response to `YfError::Status`.
pub(crate) fn ensure_success(
    resp: reqwest::Response,
    url: &Url,
) -> Result<reqwest::Response, YfError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(YfError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

/// Read the response body as text, logging its size and the endpoint it came from.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    endpoint: &str,
    symbol: &str,
) -> Result<String, YfError> {
    let status = resp.status().as_u16();
    let text = resp.text().await?;
    tracing::debug!(endpoint, symbol, status, bytes = text.len(), "response received");
    Ok(text)
}
