use crate::core::{YfClient, YfError, net};
use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct V10Envelope {
    #[serde(rename = "quoteSummary")]
    pub(crate) quote_summary: Option<V10QuoteSummary>,
    /// Yahoo answers auth failures with a `finance` envelope instead.
    pub(crate) finance: Option<V10QuoteSummary>,
}

#[derive(Deserialize)]
pub(crate) struct V10QuoteSummary {
    pub(crate) result: Option<Vec<serde_json::Value>>,
    pub(crate) error: Option<V10Error>,
}

#[derive(Deserialize)]
pub(crate) struct V10Error {
    pub(crate) description: String,
}

impl V10Envelope {
    fn error(&self) -> Option<&V10Error> {
        self.quote_summary
            .as_ref()
            .and_then(|qs| qs.error.as_ref())
            .or_else(|| self.finance.as_ref().and_then(|f| f.error.as_ref()))
    }
}

async fn attempt_fetch(
    client: &YfClient,
    symbol: &str,
    modules: &str,
    caller: &str,
) -> Result<(u16, String, V10Envelope), YfError> {
    client.ensure_credentials().await?;

    let crumb = client
        .crumb()
        .await
        .ok_or_else(|| YfError::Auth("Crumb is not set".into()))?;

    let mut url = client.base_quote_api().join(symbol)?;
    url.query_pairs_mut()
        .append_pair("modules", modules)
        .append_pair("crumb", &crumb);

    let resp = client.http().get(url.clone()).send().await?;
    let status = resp.status().as_u16();
    let text = net::get_text(resp, &format!("{caller}_quotesummary"), symbol).await?;

    match serde_json::from_str::<V10Envelope>(&text) {
        Ok(env) => Ok((status, url.to_string(), env)),
        Err(_) if !(200..300).contains(&status) => Err(YfError::Status {
            status,
            url: url.to_string(),
        }),
        Err(e) => Err(YfError::Data(format!("quoteSummary json parse: {e}"))),
    }
}

/// Fetch the quoteSummary envelope for `modules`, refreshing a stale crumb once.
pub(crate) async fn fetch(
    client: &YfClient,
    symbol: &str,
    modules: &str,
    caller: &str,
) -> Result<V10Envelope, YfError> {
    for attempt in 0..=1 {
        let (status, url, env) = attempt_fetch(client, symbol, modules, caller).await?;

        if let Some(error) = env.error() {
            let desc = error.description.to_ascii_lowercase();
            if desc.contains("invalid crumb") && attempt == 0 {
                tracing::debug!(caller, symbol, "invalid crumb; refreshing and retrying");
                client.clear_crumb().await;
                continue;
            }
            return Err(YfError::Data(format!("yahoo error: {}", error.description)));
        }

        if !(200..300).contains(&status) {
            return Err(YfError::Status { status, url });
        }

        return Ok(env);
    }

    Err(YfError::Data(format!("{caller} API call failed after retry")))
}

/// Fetch `modules` and return the first result object, if Yahoo returned one.
pub(crate) async fn fetch_first_result(
    client: &YfClient,
    symbol: &str,
    modules: &str,
    caller: &str,
) -> Result<Option<serde_json::Value>, YfError> {
    let env = fetch(client, symbol, modules, caller).await?;

    Ok(env
        .quote_summary
        .and_then(|qs| qs.result)
        .and_then(|v| v.into_iter().next()))
}
