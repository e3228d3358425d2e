use crate::common::{self, client_for, mock_profile, setup_server};
use httpmock::Method::GET;
use serde_json::json;
use yfinance_financials::YfError;
use yfinance_financials::profile::{ProfileRecord, load_profile, resolve_company};

#[tokio::test]
async fn offline_company_info_from_profile_record() {
    let server = setup_server();
    let sym = "AAPL";
    let mock = mock_profile(&server, sym, common::fixture("profile_api", sym, "json"));

    let client = client_for(&server);
    let record = load_profile(&client, sym).await.unwrap();
    mock.assert();

    let info = resolve_company(&record, sym).unwrap();
    assert_eq!(info.name, "Apple Inc.");
    assert_eq!(info.sector.as_deref(), Some("Technology"));
    assert_eq!(info.industry.as_deref(), Some("Consumer Electronics"));
    assert_eq!(info.website.as_deref(), Some("https://www.apple.com"));
    assert_eq!(info.country.as_deref(), Some("United States"));
    assert_eq!(info.employees, Some(161_000));
    assert_eq!(info.exchange.as_deref(), Some("NMS"));
    assert!(
        info.description
            .as_deref()
            .is_some_and(|d| d.starts_with("Apple Inc. designs"))
    );
}

#[tokio::test]
async fn offline_missing_long_name_is_unresolved() {
    let server = setup_server();
    let sym = "ZZZZINVALID";
    let mock = mock_profile(&server, sym, common::fixture("profile_api", sym, "json"));

    let client = client_for(&server);
    let record = load_profile(&client, sym).await.unwrap();
    mock.assert();

    match resolve_company(&record, sym) {
        Err(YfError::UnresolvedSymbol(s)) => assert_eq!(s, sym),
        other => panic!("expected UnresolvedSymbol, got {other:?}"),
    }
}

#[tokio::test]
async fn offline_yahoo_not_found_is_an_error() {
    let server = setup_server();
    let sym = "NOPE";
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v10/finance/quoteSummary/{sym}"));
        then.status(404)
            .header("content-type", "application/json")
            .body(r#"{"quoteSummary":{"result":null,"error":{"code":"Not Found","description":"Quote not found for symbol: NOPE"}}}"#);
    });

    let client = client_for(&server);
    let err = load_profile(&client, sym).await.unwrap_err();
    mock.assert();

    assert!(err.to_string().contains("Quote not found"), "got {err}");
}

#[tokio::test]
async fn offline_empty_result_is_an_empty_record() {
    let server = setup_server();
    let sym = "EMPTY";
    let mock = mock_profile(
        &server,
        sym,
        r#"{"quoteSummary":{"result":[],"error":null}}"#.to_string(),
    );

    let client = client_for(&server);
    let record = load_profile(&client, sym).await.unwrap();
    mock.assert();

    assert!(record.is_empty());
    assert!(matches!(
        resolve_company(&record, sym),
        Err(YfError::UnresolvedSymbol(_))
    ));
}

#[test]
fn long_name_falls_back_to_quote_type_and_blank_text_is_null() {
    let record = ProfileRecord::from_value(json!({
        "price": {"longName": "   ", "exchange": ""},
        "quoteType": {"longName": "Berkshire Hathaway Inc.", "exchange": "NYQ"},
        "assetProfile": {"sector": "", "fullTimeEmployees": {"raw": 392400}},
    }))
    .unwrap();

    let info = resolve_company(&record, "BRK-B").unwrap();
    assert_eq!(info.name, "Berkshire Hathaway Inc.");
    assert_eq!(info.exchange.as_deref(), Some("NYQ"));
    assert_eq!(info.sector, None);
    assert_eq!(info.employees, Some(392_400));
    assert_eq!(info.website, None);
}

#[test]
fn short_name_alone_does_not_resolve() {
    let record = ProfileRecord::from_value(json!({
        "price": {"shortName": "Apple Inc."},
    }))
    .unwrap();
    assert!(resolve_company(&record, "AAPL").is_err());
}

#[test]
fn record_requires_an_object() {
    assert!(ProfileRecord::from_value(json!([1, 2])).is_err());
}
