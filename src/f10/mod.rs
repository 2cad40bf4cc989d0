//! F10 company profile data: holders, management, industry, dividends, share changes.
//!
//! Upstream uses terse key names (`chg`, `held_num`, `ind_name`, and a few
//! misspellings such as `addtions`). Models here expose readable field names,
//! accept both spellings when decoding, and keep accessor methods named after
//! the upstream keys.

mod model;

pub use model::{
    F10BonusAddition, F10BonusData, F10BonusDividendItem, F10BusinessAnalysisData,
    F10BusinessAnalysisItem, F10IndustryCompanyInfo, F10IndustryCompareData,
    F10IndustryCompareItem, F10IndustryCompareStats, F10IndustryData, F10IndustryTag,
    F10MainIndicatorData, F10MainIndicatorItem, F10OrgHoldingChangeData, F10OrgHoldingChangeItem,
    F10ShareholderCountData, F10ShareholderCountItem, F10SharesChangeData, F10SharesChangeItem,
    F10SharesRestrictionItem, F10SkholderChangeData, F10SkholderChangeItem, F10SkholderData,
    F10SkholderItem, F10TimePoint, F10TopHolderItem, F10TopHoldersData,
};

use crate::core::{ApiRequest, Host, Transport, XueqiuResponse};

fn f10(endpoint: &str, symbol: &str) -> ApiRequest {
    ApiRequest::get(Host::Stock, format!("/v5/stock/f10/cn/{endpoint}.json"))
        .param("symbol", symbol)
        .require_auth()
}

/// F10 endpoints. All of them need a cookie.
pub struct F10Api<'a, C> {
    client: &'a C,
}

impl<'a, C: Transport + 'a> F10Api<'a, C> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Share trades by executives.
    pub fn skholderchg(&self, symbol: &str) -> C::Output<'a, XueqiuResponse<F10SkholderChangeData>> {
        self.client.execute(f10("skholderchg", symbol))
    }

    /// Executives and board members.
    pub fn skholder(&self, symbol: &str) -> C::Output<'a, XueqiuResponse<F10SkholderData>> {
        self.client.execute(f10("skholder", symbol))
    }

    /// Industry, concepts and basic company info.
    pub fn industry(&self, symbol: &str) -> C::Output<'a, XueqiuResponse<F10IndustryData>> {
        self.client.execute(f10("industry", symbol))
    }

    /// Shareholder counts over time.
    pub fn holders(&self, symbol: &str) -> C::Output<'a, XueqiuResponse<F10ShareholderCountData>> {
        self.client.execute(f10("holders", symbol))
    }

    /// Dividends, placements and rights issues. The web UI uses page 1, size 10.
    pub fn bonus(
        &self,
        symbol: &str,
        page: u32,
        size: u32,
    ) -> C::Output<'a, XueqiuResponse<F10BonusData>> {
        let req = f10("bonus", symbol).param("page", page).param("size", size);
        self.client.execute(req)
    }

    /// Institutional holding changes per reporting period.
    pub fn org_holding_change(
        &self,
        symbol: &str,
    ) -> C::Output<'a, XueqiuResponse<F10OrgHoldingChangeData>> {
        self.client.execute(f10("org_holding/change", symbol))
    }

    /// Peer comparison within the industry. `kind` is usually `single`.
    pub fn industry_compare(
        &self,
        symbol: &str,
        kind: &str,
    ) -> C::Output<'a, XueqiuResponse<F10IndustryCompareData>> {
        let req = ApiRequest::get(Host::Stock, "/v5/stock/f10/cn/industry/compare.json")
            .param("type", kind)
            .param("symbol", symbol)
            .require_auth();
        self.client.execute(req)
    }

    /// Management discussion of operations.
    pub fn business_analysis(
        &self,
        symbol: &str,
    ) -> C::Output<'a, XueqiuResponse<F10BusinessAnalysisData>> {
        self.client.execute(f10("business_analysis", symbol))
    }

    /// Share capital changes and lock-up expiries.
    pub fn shareschg(
        &self,
        symbol: &str,
        count: u32,
    ) -> C::Output<'a, XueqiuResponse<F10SharesChangeData>> {
        self.client
            .execute(f10("shareschg", symbol).param("count", count))
    }

    /// Top ten holders; `circula = 1` restricts to float shares.
    pub fn top_holders(
        &self,
        symbol: &str,
        circula: u32,
    ) -> C::Output<'a, XueqiuResponse<F10TopHoldersData>> {
        self.client
            .execute(f10("top_holders", symbol).param("circula", circula))
    }

    /// Headline indicators for recent periods.
    pub fn indicator(&self, symbol: &str) -> C::Output<'a, XueqiuResponse<F10MainIndicatorData>> {
        self.client.execute(f10("indicator", symbol))
    }
}
