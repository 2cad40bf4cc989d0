//! Capital flows: margin balances, block trades, order-size breakdown and fund flow.

mod model;

pub use model::{
    BlocktransData, BlocktransItem, CapitalAssortData, CapitalFlowData, CapitalFlowItem,
    CapitalHistoryData, CapitalHistoryItem, MarginData, MarginItem,
};

use crate::core::{ApiRequest, Host, Transport, XueqiuResponse};

/// Page size the web UI uses for margin data.
pub const DEFAULT_MARGIN_SIZE: u32 = 180;
/// Page size the web UI uses for block trades.
pub const DEFAULT_BLOCKTRANS_SIZE: u32 = 30;
pub const DEFAULT_HISTORY_COUNT: u32 = 20;

fn capital(endpoint: &str, symbol: &str) -> ApiRequest {
    ApiRequest::get(Host::Stock, format!("/v5/stock/capital/{endpoint}.json"))
        .param("symbol", symbol)
        .require_auth()
}

pub struct CapitalApi<'a, C> {
    client: &'a C,
}

impl<'a, C: Transport + 'a> CapitalApi<'a, C> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Margin trading and short selling balances, newest first.
    pub fn margin(
        &self,
        symbol: &str,
        page: u32,
        size: u32,
    ) -> C::Output<'a, XueqiuResponse<MarginData>> {
        let req = capital("margin", symbol)
            .param("page", page)
            .param("size", size);
        self.client.execute(req)
    }

    /// Block (大宗) trades.
    pub fn blocktrans(
        &self,
        symbol: &str,
        page: u32,
        size: u32,
    ) -> C::Output<'a, XueqiuResponse<BlocktransData>> {
        let req = capital("blocktrans", symbol)
            .param("page", page)
            .param("size", size);
        self.client.execute(req)
    }

    /// Today's turnover split by order size.
    pub fn assort(&self, symbol: &str) -> C::Output<'a, XueqiuResponse<CapitalAssortData>> {
        self.client.execute(capital("assort", symbol))
    }

    /// Intraday net capital flow.
    pub fn flow(&self, symbol: &str) -> C::Output<'a, XueqiuResponse<CapitalFlowData>> {
        self.client.execute(capital("flow", symbol))
    }

    /// Daily net capital flow plus 3/5/10/20-day sums.
    pub fn history(
        &self,
        symbol: &str,
        count: u32,
    ) -> C::Output<'a, XueqiuResponse<CapitalHistoryData>> {
        self.client
            .execute(capital("history", symbol).param("count", count))
    }
}
