//! Tracked profile metrics. Each entry maps an output name to the
//! `module.field` paths it is read from, tried in order.

/// One output metric and where to read it.
#[derive(Debug, Clone, Copy)]
pub struct MetricField {
    pub name: &'static str,
    pub sources: &'static [&'static str],
}

/// A named group of metrics in the output bundle.
#[derive(Debug, Clone, Copy)]
pub struct MetricGroupSpec {
    pub name: &'static str,
    pub fields: &'static [MetricField],
}

const fn field(name: &'static str, sources: &'static [&'static str]) -> MetricField {
    MetricField { name, sources }
}

pub const KEY_METRICS: &[MetricField] = &[
    field("market_cap", &["summaryDetail.marketCap", "price.marketCap"]),
    field("enterprise_value", &["defaultKeyStatistics.enterpriseValue"]),
    field("pe_ratio", &["summaryDetail.trailingPE"]),
    field("forward_pe", &["summaryDetail.forwardPE", "defaultKeyStatistics.forwardPE"]),
    field("peg_ratio", &["defaultKeyStatistics.pegRatio"]),
    field("price_to_book", &["defaultKeyStatistics.priceToBook"]),
    field("price_to_sales", &["summaryDetail.priceToSalesTrailing12Months"]),
    field("beta", &["summaryDetail.beta", "defaultKeyStatistics.beta"]),
    field("dividend_yield", &["summaryDetail.dividendYield"]),
    field("dividend_rate", &["summaryDetail.dividendRate"]),
    field("five_year_avg_dividend_yield", &["summaryDetail.fiveYearAvgDividendYield"]),
];

pub const EFFICIENCY_METRICS: &[MetricField] = &[
    field("return_on_equity", &["financialData.returnOnEquity"]),
    field("return_on_assets", &["financialData.returnOnAssets"]),
    field("profit_margin", &["financialData.profitMargins", "defaultKeyStatistics.profitMargins"]),
    field("operating_margin", &["financialData.operatingMargins"]),
    field("gross_margin", &["financialData.grossMargins"]),
];

pub const GROWTH_METRICS: &[MetricField] = &[
    field("revenue_growth", &["financialData.revenueGrowth"]),
    field("earnings_growth", &["financialData.earningsGrowth"]),
    field("earnings_quarterly_growth", &["defaultKeyStatistics.earningsQuarterlyGrowth"]),
];

pub const DEBT_METRICS: &[MetricField] = &[
    field("debt_to_equity", &["financialData.debtToEquity"]),
    field("current_ratio", &["financialData.currentRatio"]),
    field("quick_ratio", &["financialData.quickRatio"]),
];

/// Groups in output order.
pub const GROUPS: &[MetricGroupSpec] = &[
    MetricGroupSpec { name: "key_metrics", fields: KEY_METRICS },
    MetricGroupSpec { name: "efficiency_metrics", fields: EFFICIENCY_METRICS },
    MetricGroupSpec { name: "growth_metrics", fields: GROWTH_METRICS },
    MetricGroupSpec { name: "debt_metrics", fields: DEBT_METRICS },
];
