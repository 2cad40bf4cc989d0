//! Danjuan (蛋卷基金) mutual fund endpoints.
//!
//! Danjuan belongs to the Xueqiu group but lives on its own host; no cookie is
//! sent and its `{data, result_code}` convention is left for the caller to read.

use crate::core::wire::{self, Extra};
use crate::core::{ApiRequest, Host, Transport};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DanjuanResponse {
    pub data: Option<Value>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub code: Option<i64>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

fn djapi(path: impl Into<String>) -> ApiRequest {
    ApiRequest::get(Host::Danjuan, path).unchecked()
}

pub struct DanjuanApi<'a, C> {
    client: &'a C,
}

impl<'a, C: Transport + 'a> DanjuanApi<'a, C> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Fees, manager and asset allocation in one payload.
    pub fn fund_detail(&self, fund_code: &str) -> C::Output<'a, DanjuanResponse> {
        self.client
            .execute(djapi(format!("/djapi/fund/detail/{fund_code}")))
    }

    /// Basic fund info and latest NAV.
    pub fn fund_info(&self, fund_code: &str) -> C::Output<'a, DanjuanResponse> {
        self.client.execute(djapi(format!("/djapi/fund/{fund_code}")))
    }

    /// NAV growth chart. `day` selects the window, e.g. `ty` (this year), `1y`, `3y`, `all`.
    pub fn fund_growth(&self, fund_code: &str, day: &str) -> C::Output<'a, DanjuanResponse> {
        let req = djapi(format!("/djapi/fund/growth/{fund_code}")).param("day", day);
        self.client.execute(req)
    }

    /// Paged daily NAV history.
    pub fn fund_nav_history(
        &self,
        fund_code: &str,
        page: u32,
        size: u32,
    ) -> C::Output<'a, DanjuanResponse> {
        let req = djapi(format!("/djapi/fund/nav/history/{fund_code}"))
            .param("page", page)
            .param("size", size);
        self.client.execute(req)
    }

    /// Manager track record for the fund.
    pub fn fund_achievement(&self, fund_code: &str) -> C::Output<'a, DanjuanResponse> {
        self.client.execute(djapi(format!(
            "/djapi/fundx/base/fund/achievement/{fund_code}"
        )))
    }

    /// Asset allocation breakdown.
    pub fn fund_asset(&self, fund_code: &str) -> C::Output<'a, DanjuanResponse> {
        let req = djapi("/djapi/fundx/base/fund/record/asset/percent").param("fund_code", fund_code);
        self.client.execute(req)
    }

    /// Fund managers; `post_status` 1 lists only the current ones.
    pub fn fund_manager(&self, fund_code: &str, post_status: u32) -> C::Output<'a, DanjuanResponse> {
        let req = djapi("/djapi/fundx/base/fund/manager/list")
            .param("fund_code", fund_code)
            .param("post_status", post_status);
        self.client.execute(req)
    }

    /// Subscription/redemption confirmation dates.
    pub fn fund_trade_date(&self, fund_code: &str) -> C::Output<'a, DanjuanResponse> {
        let req = djapi("/djapi/fund/order/v2/trade_date").param("fd_code", fund_code);
        self.client.execute(req)
    }

    /// Derived statistics: returns by period, drawdowns, rankings.
    pub fn fund_derived(&self, fund_code: &str) -> C::Output<'a, DanjuanResponse> {
        self.client
            .execute(djapi(format!("/djapi/fund/derived/{fund_code}")))
    }
}
