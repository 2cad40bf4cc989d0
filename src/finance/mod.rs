//! Financial statements: cash flow, indicators, balance sheet, income and business breakdown.
//!
//! The classic endpoints are CN-only and take [`StatementQuery`]; the `_v2` variants
//! accept a region and detail switch through [`FinanceQuery`].

mod api;
mod model;

pub use model::{
    BusinessClass, BusinessItem, BusinessPeriod, BusinessStatementData, FinanceMetricPeriod,
    FinanceMetricStatementData, MetricValue,
};

use crate::core::{Transport, XueqiuResponse};
use api::Statement;

/// Options for the classic statement endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementQuery {
    /// Annual reports only (`type=Q4`).
    pub is_annals: bool,
    /// Number of periods. Default 10.
    pub count: u32,
}

impl Default for StatementQuery {
    fn default() -> Self {
        Self {
            is_annals: false,
            count: 10,
        }
    }
}

impl StatementQuery {
    /// Q4 (annual) reports only.
    pub fn annual() -> Self {
        Self {
            is_annals: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }
}

/// Options for the `_v2` statement endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinanceQuery {
    pub count: u32,
    /// Market region path segment, e.g. `cn`, `hk`, `us`. Lower-cased before use.
    pub region: String,
    /// Report type filter, e.g. `all`, `Q4`.
    pub kind: String,
    pub is_detail: bool,
}

impl Default for FinanceQuery {
    fn default() -> Self {
        Self {
            count: 10,
            region: "cn".into(),
            kind: "all".into(),
            is_detail: true,
        }
    }
}

impl FinanceQuery {
    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    #[must_use]
    pub fn is_detail(mut self, yes: bool) -> Self {
        self.is_detail = yes;
        self
    }
}

type Statements = XueqiuResponse<FinanceMetricStatementData>;

/// Finance endpoints. All of them need a cookie.
pub struct FinanceApi<'a, C> {
    client: &'a C,
}

impl<'a, C: Transport + 'a> FinanceApi<'a, C> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Cash flow statements for a CN symbol.
    pub fn cash_flow(&self, symbol: &str, query: StatementQuery) -> C::Output<'a, Statements> {
        self.client
            .execute(api::statement(Statement::CashFlow, symbol, query))
    }

    /// Key indicators (ROE, EPS, margins, ...).
    pub fn indicator(&self, symbol: &str, query: StatementQuery) -> C::Output<'a, Statements> {
        self.client
            .execute(api::statement(Statement::Indicator, symbol, query))
    }

    /// Balance sheets.
    pub fn balance(&self, symbol: &str, query: StatementQuery) -> C::Output<'a, Statements> {
        self.client
            .execute(api::statement(Statement::Balance, symbol, query))
    }

    /// Income statements.
    pub fn income(&self, symbol: &str, query: StatementQuery) -> C::Output<'a, Statements> {
        self.client
            .execute(api::statement(Statement::Income, symbol, query))
    }

    /// Revenue broken down by product, industry and region.
    pub fn business(
        &self,
        symbol: &str,
        query: StatementQuery,
    ) -> C::Output<'a, XueqiuResponse<BusinessStatementData>> {
        self.client
            .execute(api::statement(Statement::Business, symbol, query))
    }

    /// Cash flow statements for any region.
    pub fn cash_flow_v2(&self, symbol: &str, query: &FinanceQuery) -> C::Output<'a, Statements> {
        self.client
            .execute(api::statement_v2(Statement::CashFlow, symbol, query))
    }

    /// Key indicators for any region.
    pub fn indicator_v2(&self, symbol: &str, query: &FinanceQuery) -> C::Output<'a, Statements> {
        self.client
            .execute(api::statement_v2(Statement::Indicator, symbol, query))
    }

    /// Balance sheets for any region.
    pub fn balance_v2(&self, symbol: &str, query: &FinanceQuery) -> C::Output<'a, Statements> {
        self.client
            .execute(api::statement_v2(Statement::Balance, symbol, query))
    }

    /// Income statements for any region.
    pub fn income_v2(&self, symbol: &str, query: &FinanceQuery) -> C::Output<'a, Statements> {
        self.client
            .execute(api::statement_v2(Statement::Income, symbol, query))
    }
}
