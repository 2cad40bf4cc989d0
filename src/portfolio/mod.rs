//! The logged-in user's watchlists ("portfolios").

mod model;

pub use model::{PortfolioListData, PortfolioListItem, PortfolioStockItem, PortfolioStocksData};

use crate::core::{ApiRequest, Host, Transport, XueqiuResponse};

const LIST_PATH: &str = "/v5/stock/portfolio/list.json";
const STOCK_LIST_PATH: &str = "/v5/stock/portfolio/stock/list.json";

/// Page size used by the web UI when listing a watchlist.
pub const DEFAULT_STOCKS_SIZE: u32 = 1000;

pub struct PortfolioApi<'a, C> {
    client: &'a C,
}

impl<'a, C: Transport + 'a> PortfolioApi<'a, C> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// All watchlists. `system` includes the built-in ones (全部, 沪深, ...).
    pub fn list(&self, system: bool) -> C::Output<'a, XueqiuResponse<PortfolioListData>> {
        let req = ApiRequest::get(Host::Stock, LIST_PATH)
            .param("system", system)
            .require_auth();
        self.client.execute(req)
    }

    /// Symbols of one watchlist. `category` 1 = stocks.
    pub fn stocks(
        &self,
        pid: i64,
        size: u32,
        category: u32,
    ) -> C::Output<'a, XueqiuResponse<PortfolioStocksData>> {
        let req = ApiRequest::get(Host::Stock, STOCK_LIST_PATH)
            .param("size", size)
            .param("category", category)
            .param("pid", pid)
            .require_auth();
        self.client.execute(req)
    }
}
