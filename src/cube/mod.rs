//! Cubes (雪球组合): simulated portfolios published on xueqiu.com.

mod model;

pub use model::{
    CubeHolding, CubeNavPoint, CubeNavSeries, CubeQuote, CubeRebalancing,
    CubeRebalancingCurrentData, CubeRebalancingHistoryData, CubeRebalancingHistoryItem,
};

use crate::core::{ApiRequest, Host, Transport, XueqiuResponse};
use std::collections::BTreeMap;

fn cube(path: &str, cube_symbol: &str) -> ApiRequest {
    ApiRequest::get(Host::Main, path)
        .param("cube_symbol", cube_symbol)
        .require_auth()
}

/// Cube endpoints on the main site. All of them need a cookie.
pub struct CubeApi<'a, C> {
    client: &'a C,
}

impl<'a, C: Transport + 'a> CubeApi<'a, C> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Daily net value series; the cube itself and its benchmark usually come back as two series.
    pub fn nav_daily(&self, cube_symbol: &str) -> C::Output<'a, XueqiuResponse<Vec<CubeNavSeries>>> {
        self.client
            .execute(cube("/cubes/nav_daily/all.json", cube_symbol))
    }

    /// Past rebalancings, newest first. `count` is the page size.
    pub fn rebalancing_history(
        &self,
        cube_symbol: &str,
        count: u32,
        page: u32,
    ) -> C::Output<'a, XueqiuResponse<CubeRebalancingHistoryData>> {
        let req = cube("/cubes/rebalancing/history.json", cube_symbol)
            .param("count", count)
            .param("page", page);
        self.client.execute(req)
    }

    /// The latest rebalancing and the holdings it produced.
    pub fn rebalancing_current(
        &self,
        cube_symbol: &str,
    ) -> C::Output<'a, XueqiuResponse<CubeRebalancingCurrentData>> {
        self.client
            .execute(cube("/cubes/rebalancing/current.json", cube_symbol))
    }

    /// Quotes keyed by cube symbol. `code` may list several symbols separated by commas.
    pub fn quote(&self, code: &str) -> C::Output<'a, XueqiuResponse<BTreeMap<String, CubeQuote>>> {
        let req = ApiRequest::get(Host::Main, "/cubes/quote.json")
            .param("code", code)
            .require_auth();
        self.client.execute(req)
    }
}
