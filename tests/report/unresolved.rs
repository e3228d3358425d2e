use crate::common::{self, client_for, mock_profile, setup_server};
use httpmock::Method::GET;
use serde_json::Value;
use yfinance_financials::{Symbol, report};

#[tokio::test]
async fn unresolved_symbol_gives_error_envelope_without_statement_calls() {
    let server = setup_server();
    let sym = "ZZZZINVALID";
    let profile = mock_profile(&server, sym, common::fixture("profile_api", sym, "json"));
    let timeseries = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/ws/fundamentals-timeseries/v1/finance/timeseries/{sym}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(common::EMPTY_TIMESERIES);
    });

    let client = client_for(&server);
    let envelope = report::fetch_report(&client, &Symbol::parse(sym).unwrap()).await;

    profile.assert();
    timeseries.assert_hits(0);
    assert_eq!(envelope.exit_code(), 1);

    let doc: Value = serde_json::from_str(&envelope.to_json()).unwrap();
    assert_eq!(doc["status"], "error");
    assert_eq!(doc["error"], "No company data found for symbol ZZZZINVALID");
    assert!(doc.get("financial_statements").is_none());
    assert!(doc.get("metrics").is_none());
}

#[tokio::test]
async fn profile_transport_failure_gives_error_envelope() {
    let server = setup_server();
    let sym = "AAPL";
    let profile = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v10/finance/quoteSummary/{sym}"));
        then.status(500).body("<html>oops</html>");
    });

    let client = client_for(&server);
    let envelope = report::fetch_report(&client, &Symbol::parse(sym).unwrap()).await;

    profile.assert();
    assert!(!envelope.is_success());

    let doc: Value = serde_json::from_str(&envelope.to_json()).unwrap();
    assert_eq!(doc["status"], "error");
    assert!(doc["error"].as_str().unwrap().contains("500"));
}
