use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::keys;

/// Reporting period length of a statement table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Frequency {
    Quarterly,
    Annual,
}

impl Frequency {
    /// Fetch order: quarterly first, then annual.
    pub const ALL: [Self; 2] = [Self::Quarterly, Self::Annual];

    /// Prefix Yahoo puts in front of timeseries keys for this frequency.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Quarterly => "quarterly",
            Self::Annual => "annual",
        }
    }
}

/// The three financial statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatementKind {
    IncomeStatement,
    BalanceSheet,
    CashFlow,
}

impl StatementKind {
    pub const ALL: [Self; 3] = [Self::IncomeStatement, Self::BalanceSheet, Self::CashFlow];

    /// Output name of the statement, as used in the result envelope.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IncomeStatement => "income_statement",
            Self::BalanceSheet => "balance_sheet",
            Self::CashFlow => "cash_flow",
        }
    }

    /// Timeseries keys tracked for this statement, without frequency prefix.
    #[must_use]
    pub const fn keys(self) -> &'static [&'static str] {
        match self {
            Self::IncomeStatement => keys::INCOME_STATEMENT,
            Self::BalanceSheet => keys::BALANCE_SHEET,
            Self::CashFlow => keys::CASH_FLOW,
        }
    }
}

/// One reporting period of a raw statement, as the upstream delivered it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawColumn {
    /// Period value, normally an ISO date string.
    pub period: Value,
    /// Metric name to raw scalar. Anything other than a JSON object is malformed.
    pub cells: Value,
}

/// A raw statement: reporting periods in upstream order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub columns: Vec<RawColumn>,
}

impl RawTable {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// The six raw tables of one fetch. A table that could not be fetched is absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawStatements {
    tables: BTreeMap<(Frequency, StatementKind), RawTable>,
}

impl RawStatements {
    #[must_use]
    pub fn get(&self, freq: Frequency, kind: StatementKind) -> Option<&RawTable> {
        self.tables.get(&(freq, kind))
    }

    pub fn insert(&mut self, freq: Frequency, kind: StatementKind, table: RawTable) {
        self.tables.insert((freq, kind), table);
    }

    /// Number of tables present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Period-end date (`YYYY-MM-DD`) to metric name to value.
pub type StatementTable = BTreeMap<String, BTreeMap<String, Option<f64>>>;

/// The three statements at one frequency.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatementSet {
    pub income_statement: StatementTable,
    pub balance_sheet: StatementTable,
    pub cash_flow: StatementTable,
}

impl StatementSet {
    #[must_use]
    pub const fn get(&self, kind: StatementKind) -> &StatementTable {
        match kind {
            StatementKind::IncomeStatement => &self.income_statement,
            StatementKind::BalanceSheet => &self.balance_sheet,
            StatementKind::CashFlow => &self.cash_flow,
        }
    }

    pub const fn get_mut(&mut self, kind: StatementKind) -> &mut StatementTable {
        match kind {
            StatementKind::IncomeStatement => &mut self.income_statement,
            StatementKind::BalanceSheet => &mut self.balance_sheet,
            StatementKind::CashFlow => &mut self.cash_flow,
        }
    }
}

/// All six normalized statement tables, grouped by frequency.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FinancialStatements {
    pub quarterly: StatementSet,
    pub annual: StatementSet,
}

impl FinancialStatements {
    #[must_use]
    pub const fn get(&self, freq: Frequency) -> &StatementSet {
        match freq {
            Frequency::Quarterly => &self.quarterly,
            Frequency::Annual => &self.annual,
        }
    }

    pub const fn get_mut(&mut self, freq: Frequency) -> &mut StatementSet {
        match freq {
            Frequency::Quarterly => &mut self.quarterly,
            Frequency::Annual => &mut self.annual,
        }
    }
}
