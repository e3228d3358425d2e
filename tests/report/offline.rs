use crate::common::{self, client_for, mock_all_statements, mock_profile, setup_server};
use serde_json::Value;
use yfinance_financials::fundamentals::{Frequency, StatementKind};
use yfinance_financials::{ResultEnvelope, Symbol, report};

fn aapl_statements() -> Vec<(Frequency, StatementKind, String)> {
    vec![
        (
            Frequency::Quarterly,
            StatementKind::IncomeStatement,
            common::fixture("timeseries_income_statement_quarterly", "AAPL", "json"),
        ),
        (
            Frequency::Annual,
            StatementKind::BalanceSheet,
            common::fixture("timeseries_balance_sheet_annual", "AAPL", "json"),
        ),
    ]
}

#[tokio::test]
async fn offline_success_envelope_for_aapl() {
    let server = setup_server();
    let sym = "AAPL";
    let profile = mock_profile(&server, sym, common::fixture("profile_api", sym, "json"));
    let statements = mock_all_statements(&server, sym, &aapl_statements());

    let client = client_for(&server);
    let envelope = report::fetch_report(&client, &Symbol::parse("aapl").unwrap()).await;

    profile.assert();
    for m in &statements {
        m.assert_hits(1);
    }
    assert_eq!(envelope.exit_code(), 0);

    let ResultEnvelope::Success(rep) = &envelope else {
        panic!("expected success, got {envelope:?}");
    };
    assert_eq!(rep.symbol.as_str(), "AAPL");
    assert_eq!(rep.company_info.name, "Apple Inc.");

    let q = &rep.financial_statements.quarterly;
    assert_eq!(
        q.income_statement["2024-06-30"]["Total Revenue"],
        Some(85_777_000_000.0)
    );
    assert!(q.balance_sheet.is_empty());
    assert!(q.cash_flow.is_empty());
    assert_eq!(
        rep.financial_statements.annual.balance_sheet["2023-09-30"]["Total Assets"],
        Some(352_583_000_000.0)
    );

    let key = rep.metrics.group("key_metrics").unwrap();
    assert_eq!(key.get("market_cap"), Some(Some(3_000_000_000_000.0)));
    assert_eq!(key.get("peg_ratio"), Some(None));

    let text = envelope.to_json();
    assert!(text.starts_with(r#"{"status":"success","symbol":"AAPL""#), "{text}");
    assert!(text.contains(r#""market_cap":3000000000000.0"#), "{text}");
    assert!(text.contains(r#""Diluted EPS":null"#), "{text}");

    let doc: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["company_info"]["employees"], 161_000);
    assert_eq!(doc["company_info"]["exchange"], "NMS");
    for freq in ["quarterly", "annual"] {
        for kind in ["income_statement", "balance_sheet", "cash_flow"] {
            assert!(doc["financial_statements"][freq][kind].is_object(), "{freq}.{kind}");
        }
    }
}

#[tokio::test]
async fn offline_malformed_metrics_module_degrades_to_empty_metrics() {
    let server = setup_server();
    let sym = "AAPL";

    let mut body: Value =
        serde_json::from_str(&common::fixture("profile_api", sym, "json")).unwrap();
    body["quoteSummary"]["result"][0]["financialData"] = Value::String("unavailable".into());
    let profile = mock_profile(&server, sym, body.to_string());
    let _statements = mock_all_statements(&server, sym, &aapl_statements());

    let client = client_for(&server);
    let envelope = report::fetch_report(&client, &Symbol::parse(sym).unwrap()).await;
    profile.assert();

    assert!(envelope.is_success());
    let text = envelope.to_json();
    assert!(text.contains(r#""metrics":{}"#), "{text}");
    assert!(text.contains(r#""name":"Apple Inc.""#), "{text}");
}

#[tokio::test]
async fn offline_statement_outage_still_succeeds_with_empty_tables() {
    let server = setup_server();
    let sym = "AAPL";
    let profile = mock_profile(&server, sym, common::fixture("profile_api", sym, "json"));
    let down = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path(format!("/ws/fundamentals-timeseries/v1/finance/timeseries/{sym}"));
        then.status(503);
    });

    let client = client_for(&server);
    let envelope = report::fetch_report(&client, &Symbol::parse(sym).unwrap()).await;

    profile.assert();
    down.assert_hits(3);

    let ResultEnvelope::Success(rep) = &envelope else {
        panic!("expected success, got {envelope:?}");
    };
    assert!(rep.financial_statements.quarterly.income_statement.is_empty());
    assert!(rep.financial_statements.annual.cash_flow.is_empty());
    assert!(!rep.metrics.is_empty());
}
