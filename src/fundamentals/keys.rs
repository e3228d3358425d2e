//! Timeseries keys requested per statement. Yahoo expects each one prefixed
//! with `quarterly` or `annual`; the output metric name is the key title-cased
//! (`TotalRevenue` becomes `Total Revenue`).

pub(crate) const INCOME_STATEMENT: &[&str] = &[
    "TotalRevenue",
    "OperatingRevenue",
    "CostOfRevenue",
    "GrossProfit",
    "OperatingExpense",
    "SellingGeneralAndAdministration",
    "ResearchAndDevelopment",
    "OperatingIncome",
    "TotalOperatingIncomeAsReported",
    "NetNonOperatingInterestIncomeExpense",
    "InterestIncomeNonOperating",
    "InterestExpenseNonOperating",
    "OtherIncomeExpense",
    "PretaxIncome",
    "TaxProvision",
    "TaxRateForCalcs",
    "NetIncome",
    "NetIncomeCommonStockholders",
    "NetIncomeContinuousOperations",
    "NetIncomeFromContinuingOperationNetMinorityInterest",
    "NormalizedIncome",
    "DilutedNIAvailtoComStockholders",
    "BasicEPS",
    "DilutedEPS",
    "BasicAverageShares",
    "DilutedAverageShares",
    "TotalExpenses",
    "InterestIncome",
    "InterestExpense",
    "NetInterestIncome",
    "EBIT",
    "EBITDA",
    "NormalizedEBITDA",
    "ReconciledCostOfRevenue",
    "ReconciledDepreciation",
    "TaxEffectOfUnusualItems",
    "TotalUnusualItems",
];

pub(crate) const BALANCE_SHEET: &[&str] = &[
    "TotalAssets",
    "CurrentAssets",
    "CashCashEquivalentsAndShortTermInvestments",
    "CashAndCashEquivalents",
    "OtherShortTermInvestments",
    "Receivables",
    "AccountsReceivable",
    "Inventory",
    "OtherCurrentAssets",
    "TotalNonCurrentAssets",
    "NetPPE",
    "GrossPPE",
    "AccumulatedDepreciation",
    "Goodwill",
    "GoodwillAndOtherIntangibleAssets",
    "InvestmentsAndAdvances",
    "OtherNonCurrentAssets",
    "TotalLiabilitiesNetMinorityInterest",
    "CurrentLiabilities",
    "AccountsPayable",
    "CurrentDebt",
    "CurrentDeferredRevenue",
    "OtherCurrentLiabilities",
    "TotalNonCurrentLiabilitiesNetMinorityInterest",
    "LongTermDebt",
    "LongTermDebtAndCapitalLeaseObligation",
    "OtherNonCurrentLiabilities",
    "StockholdersEquity",
    "CommonStockEquity",
    "RetainedEarnings",
    "TotalEquityGrossMinorityInterest",
    "TotalCapitalization",
    "TotalDebt",
    "NetDebt",
    "WorkingCapital",
    "TangibleBookValue",
    "InvestedCapital",
    "ShareIssued",
    "OrdinarySharesNumber",
    "TreasurySharesNumber",
];

pub(crate) const CASH_FLOW: &[&str] = &[
    "OperatingCashFlow",
    "CashFlowFromContinuingOperatingActivities",
    "NetIncomeFromContinuingOperations",
    "DepreciationAndAmortization",
    "StockBasedCompensation",
    "DeferredIncomeTax",
    "ChangeInWorkingCapital",
    "ChangeInReceivables",
    "ChangeInInventory",
    "ChangeInPayablesAndAccruedExpense",
    "OtherNonCashItems",
    "InvestingCashFlow",
    "CapitalExpenditure",
    "NetPPEPurchaseAndSale",
    "PurchaseOfInvestment",
    "SaleOfInvestment",
    "NetBusinessPurchaseAndSale",
    "NetOtherInvestingChanges",
    "FinancingCashFlow",
    "NetIssuancePaymentsOfDebt",
    "LongTermDebtIssuance",
    "LongTermDebtPayments",
    "RepurchaseOfCapitalStock",
    "CommonStockDividendPaid",
    "CashDividendsPaid",
    "NetOtherFinancingCharges",
    "ChangesInCash",
    "BeginningCashPosition",
    "EndCashPosition",
    "FreeCashFlow",
    "IncomeTaxPaidSupplementalData",
    "InterestPaidSupplementalData",
];
