//! Real-time quotes, quote detail, order book and K-line charts.

mod api;
mod model;

pub use model::{
    KlineBar, KlineData, MarketStatus, OrderBookLevel, Pankou, Quote, QuoteDetailData,
    QuoteDetailQuote, QuoteTag,
};

use crate::core::{Transport, XueqiuResponse};

const DEFAULT_KLINE_INDICATOR: &str = "kline,pe,pb,ps,pcf,market_capital,agt,ggt,balance";

/// Parameters for [`RealtimeApi::kline`].
///
/// Defaults: daily bars, 284 of them, ending now, with the full indicator set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KlineQuery {
    pub(crate) period: String,
    pub(crate) count: i64,
    pub(crate) begin_ms: Option<i64>,
    pub(crate) indicator: String,
}

impl Default for KlineQuery {
    fn default() -> Self {
        Self {
            period: "day".into(),
            count: 284,
            begin_ms: None,
            indicator: DEFAULT_KLINE_INDICATOR.into(),
        }
    }
}

impl KlineQuery {
    /// Bar period, e.g. `1m`, `5m`, `day`, `week`, `month`.
    #[must_use]
    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.period = period.into();
        self
    }

    /// Number of bars. The sign is ignored; bars are always counted backwards from `begin`.
    #[must_use]
    pub fn count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    /// Anchor timestamp in Unix milliseconds. Defaults to the time of the call.
    #[must_use]
    pub fn begin_ms(mut self, begin_ms: i64) -> Self {
        self.begin_ms = Some(begin_ms);
        self
    }

    #[must_use]
    pub fn indicator(mut self, indicator: impl Into<String>) -> Self {
        self.indicator = indicator.into();
        self
    }
}

/// Real-time endpoints on the stock host.
pub struct RealtimeApi<'a, C> {
    client: &'a C,
}

impl<'a, C: Transport + 'a> RealtimeApi<'a, C> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Lightweight quotes for one or more symbols. Does not need a cookie.
    pub fn quotec<I, S>(&self, symbols: I) -> C::Output<'a, XueqiuResponse<Vec<Quote>>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = symbols
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.client.execute(api::quotec(&joined))
    }

    /// Full quote with market status and tags.
    pub fn quote_detail(&self, symbol: &str) -> C::Output<'a, XueqiuResponse<QuoteDetailData>> {
        self.client.execute(api::quote_detail(symbol))
    }

    /// Ten-level order book, normalized into `bids`/`asks`.
    pub fn pankou(&self, symbol: &str) -> C::Output<'a, XueqiuResponse<Pankou>> {
        self.client.execute(api::pankou(symbol))
    }

    /// K-line bars; see [`KlineData::bars`] for row access.
    pub fn kline(&self, symbol: &str, query: KlineQuery) -> C::Output<'a, XueqiuResponse<KlineData>> {
        self.client.execute(api::kline(symbol, &query))
    }
}
