//! Symbol search (`suggest_stock`).

mod model;

pub use model::{SuggestStockItem, SuggestStockMeta, SuggestStockResponse};

use crate::core::{ApiRequest, Host, Transport};

const SUGGEST_STOCK_PATH: &str = "/query/v1/suggest_stock.json";

pub struct SuggestApi<'a, C> {
    client: &'a C,
}

impl<'a, C: Transport + 'a> SuggestApi<'a, C> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Search symbols by code, name or pinyin initials.
    ///
    /// The response is not wrapped in the usual envelope; `code`/`success` live at
    /// the top level and are checked like any other upstream error.
    pub fn stock(&self, keyword: &str) -> C::Output<'a, SuggestStockResponse> {
        let req = ApiRequest::get(Host::Main, SUGGEST_STOCK_PATH)
            .param("q", keyword)
            .require_auth();
        self.client.execute(req)
    }
}
