use super::KlineQuery;
use crate::core::{ApiRequest, Host};

const QUOTEC_PATH: &str = "/v5/stock/realtime/quotec.json";
const PANKOU_PATH: &str = "/v5/stock/realtime/pankou.json";
const QUOTE_DETAIL_PATH: &str = "/v5/stock/quote.json";
const KLINE_PATH: &str = "/v5/stock/chart/kline.json";

pub(super) fn quotec(symbols: &str) -> ApiRequest {
    ApiRequest::get(Host::Stock, QUOTEC_PATH).param("symbol", symbols)
}

pub(super) fn quote_detail(symbol: &str) -> ApiRequest {
    ApiRequest::get(Host::Stock, QUOTE_DETAIL_PATH)
        .param("extend", "detail")
        .param("symbol", symbol)
        .require_auth()
}

pub(super) fn pankou(symbol: &str) -> ApiRequest {
    ApiRequest::get(Host::Stock, PANKOU_PATH)
        .param("symbol", symbol)
        .require_auth()
}

pub(super) fn kline(symbol: &str, query: &KlineQuery) -> ApiRequest {
    let begin = query
        .begin_ms
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
    ApiRequest::get(Host::Stock, KLINE_PATH)
        .param("symbol", symbol)
        .param("begin", begin)
        .param("period", &query.period)
        .param("type", "before")
        .param("count", -query.count.saturating_abs())
        .param("indicator", &query.indicator)
        .require_auth()
}
