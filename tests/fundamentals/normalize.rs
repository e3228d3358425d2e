use serde_json::json;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use yfinance_financials::fundamentals::{RawColumn, RawTable, normalize_statement};

/// Collects formatted log lines so a test can count them.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn lines(&self) -> Vec<String> {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf)
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn column(period: serde_json::Value, cells: serde_json::Value) -> RawColumn {
    RawColumn { period, cells }
}

#[test]
fn absent_or_empty_table_gives_empty_mapping() {
    let absent = normalize_statement(None);
    assert!(absent.table.is_empty());
    assert!(absent.skipped.is_empty());

    let empty = normalize_statement(Some(&RawTable::default()));
    assert!(empty.table.is_empty());
    assert!(empty.skipped.is_empty());
}

#[test]
fn cells_are_sanitized_and_never_dropped() {
    let raw = RawTable {
        columns: vec![column(
            json!("2024-06-30"),
            json!({
                "Total Revenue": 85_777_000_000_u64,
                "Net Income": null,
                "Diluted EPS": "NaN",
                "Tax Rate For Calcs": "Infinity",
                "Gross Profit": "39678000000",
            }),
        )],
    };

    let out = normalize_statement(Some(&raw));
    assert!(out.skipped.is_empty());

    let row = &out.table["2024-06-30"];
    assert_eq!(row.len(), 5);
    assert_eq!(row["Total Revenue"], Some(85_777_000_000.0));
    assert_eq!(row["Net Income"], None);
    assert_eq!(row["Diluted EPS"], None);
    assert_eq!(row["Tax Rate For Calcs"], None);
    assert_eq!(row["Gross Profit"], Some(39_678_000_000.0));
}

#[test]
fn one_bad_column_is_skipped_and_the_rest_kept() {
    let raw = RawTable {
        columns: vec![
            column(json!("2024-06-30"), json!({"Total Revenue": 1.0})),
            column(json!("2024-03-31"), json!("not a row")),
            column(json!("2023-12-31"), json!({"Total Revenue": 3.0})),
        ],
    };

    let out = normalize_statement(Some(&raw));

    assert_eq!(out.table.len(), 2);
    assert!(out.table.contains_key("2024-06-30"));
    assert!(out.table.contains_key("2023-12-31"));
    assert_eq!(out.skipped.len(), 1);
    assert_eq!(out.skipped[0].period, "2024-03-31");
    assert!(out.skipped[0].reason.contains("a string"));
}

#[test]
fn each_skipped_column_logs_exactly_one_warning() {
    let raw = RawTable {
        columns: vec![
            column(json!("2024-06-30"), json!({"Total Revenue": 1.0})),
            column(json!("2024-03-31"), json!([1.0, 2.0])),
            column(json!("2023-12-31"), json!({"Total Revenue": 3.0})),
        ],
    };

    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_max_level(tracing::Level::WARN)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, || normalize_statement(Some(&raw)));

    assert_eq!(out.table.len(), 2);
    let warnings: Vec<String> = captured
        .lines()
        .into_iter()
        .filter(|l| l.contains("WARN"))
        .collect();
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(warnings[0].contains("2024-03-31"), "{}", warnings[0]);
    assert!(warnings[0].contains("an array"), "{}", warnings[0]);
}

#[test]
fn clean_table_logs_nothing() {
    let raw = RawTable {
        columns: vec![column(json!("2024-06-30"), json!({"Total Revenue": 1.0}))],
    };

    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::with_default(subscriber, || normalize_statement(Some(&raw)));

    assert!(captured.lines().is_empty());
}

#[test]
fn period_that_collides_with_an_earlier_date_is_skipped() {
    let raw = RawTable {
        columns: vec![
            column(json!("2024-06-30"), json!({"Total Assets": 10.0})),
            // 2024-06-30T00:00:00Z as epoch seconds
            column(json!(1_719_705_600), json!({"Total Assets": 99.0})),
        ],
    };

    let out = normalize_statement(Some(&raw));

    assert_eq!(out.table.len(), 1);
    assert_eq!(out.table["2024-06-30"]["Total Assets"], Some(10.0));
    assert_eq!(out.skipped.len(), 1);
    assert!(out.skipped[0].reason.contains("duplicate period 2024-06-30"));
}

#[test]
fn undatable_period_keeps_its_raw_text() {
    let raw = RawTable {
        columns: vec![
            column(json!("FY2023"), json!({"Free Cash Flow": 5.5})),
            column(json!("2022-09-24T00:00:00Z"), json!({"Free Cash Flow": 4.5})),
        ],
    };

    let out = normalize_statement(Some(&raw));

    assert!(out.skipped.is_empty());
    assert_eq!(out.table["FY2023"]["Free Cash Flow"], Some(5.5));
    assert_eq!(out.table["2022-09-24"]["Free Cash Flow"], Some(4.5));
}
