use super::{FinanceQuery, StatementQuery};
use crate::core::{ApiRequest, Host};

/// Statement endpoints that share the metric-period payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Statement {
    CashFlow,
    Indicator,
    Balance,
    Income,
    Business,
}

impl Statement {
    fn endpoint(self) -> &'static str {
        match self {
            Statement::CashFlow => "cash_flow",
            Statement::Indicator => "indicator",
            Statement::Balance => "balance",
            Statement::Income => "income",
            Statement::Business => "business",
        }
    }
}

pub(super) fn statement(kind: Statement, symbol: &str, query: StatementQuery) -> ApiRequest {
    let mut req = ApiRequest::get(
        Host::Stock,
        format!("/v5/stock/finance/cn/{}.json", kind.endpoint()),
    )
    .param("symbol", symbol)
    .param("count", query.count);
    if query.is_annals {
        req = req.param("type", "Q4");
    }
    req.require_auth()
}

pub(super) fn statement_v2(kind: Statement, symbol: &str, query: &FinanceQuery) -> ApiRequest {
    let region = query.region.trim().to_ascii_lowercase();
    ApiRequest::get(
        Host::Stock,
        format!("/v5/stock/finance/{region}/{}.json", kind.endpoint()),
    )
    .param("symbol", symbol)
    .param("type", &query.kind)
    .param("is_detail", query.is_detail)
    .param("count", query.count)
    .require_auth()
}
