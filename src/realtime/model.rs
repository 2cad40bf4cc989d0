use crate::core::wire::{self, Extra, value_f64, value_or_default, value_string};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A compact real-time quote from `quotec`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    #[serde(deserialize_with = "wire::string")]
    pub symbol: String,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub current: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub percent: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub chg: Option<f64>,
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketStatus {
    #[serde(deserialize_with = "wire::opt_i64")]
    pub status_id: Option<i64>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub region: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub time_zone: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub time_zone_desc: Option<String>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub delay_tag: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteTag {
    #[serde(deserialize_with = "wire::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub value: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// The `quote` object of `quote_detail`. Only commonly used fields are typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteDetailQuote {
    #[serde(deserialize_with = "wire::opt_string")]
    pub symbol: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub code: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub exchange: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub currency: Option<String>,

    #[serde(deserialize_with = "wire::opt_f64")]
    pub current: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub percent: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub chg: Option<f64>,

    #[serde(deserialize_with = "wire::opt_f64")]
    pub open: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub last_close: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub high: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub low: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub avg_price: Option<f64>,

    #[serde(deserialize_with = "wire::opt_f64")]
    pub volume: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub turnover_rate: Option<f64>,

    #[serde(deserialize_with = "wire::opt_f64")]
    pub market_capital: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub float_market_capital: Option<f64>,

    #[serde(deserialize_with = "wire::opt_f64")]
    pub pe_ttm: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub pe_lyr: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub pb: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub ps: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub pcf: Option<f64>,

    #[serde(deserialize_with = "wire::opt_f64")]
    pub dividend: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub dividend_yield: Option<f64>,

    #[serde(deserialize_with = "wire::opt_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub issue_date: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteDetailData {
    #[serde(deserialize_with = "wire::opt_object")]
    pub market: Option<MarketStatus>,
    #[serde(deserialize_with = "wire::opt_object")]
    pub quote: Option<QuoteDetailQuote>,
    #[serde(deserialize_with = "wire::opt_extra")]
    pub others: Option<Extra>,
    #[serde(deserialize_with = "wire::opt_list")]
    pub tags: Option<Vec<QuoteTag>>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Column-oriented K-line payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KlineData {
    #[serde(deserialize_with = "wire::opt_string")]
    pub symbol: Option<String>,
    #[serde(deserialize_with = "wire::opt_list")]
    pub column: Option<Vec<String>>,
    #[serde(deserialize_with = "wire::opt_list")]
    pub item: Option<Vec<Vec<Value>>>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl KlineData {
    /// Zip `column` with every `item` row. Short rows are padded with `null`.
    pub fn bars(&self) -> Vec<KlineBar> {
        let (Some(columns), Some(rows)) = (&self.column, &self.item) else {
            return Vec::new();
        };
        if columns.is_empty() {
            return Vec::new();
        }
        rows.iter()
            .map(|row| {
                let map: Extra = columns
                    .iter()
                    .enumerate()
                    .map(|(i, col)| (col.clone(), row.get(i).cloned().unwrap_or(Value::Null)))
                    .collect();
                value_or_default(Value::Object(map))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KlineBar {
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub volume: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub open: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub high: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub low: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub close: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub chg: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub percent: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub turnoverrate: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub pe: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub pb: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub ps: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub pcf: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub market_capital: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderBookLevel {
    #[serde(deserialize_with = "wire::opt_f64")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub count: Option<f64>,
}

/// Real-time order book snapshot.
///
/// Upstream sends flat `bp1`/`bc1` … `bp10`/`bc10` (bids) and `sp*`/`sc*` (asks)
/// keys; they are gathered into `bids` and `asks` here, best level first. The flat
/// keys stay available in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Extra")]
pub struct Pankou {
    pub symbol: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub current: Option<f64>,

    pub buypct: Option<f64>,
    pub sellpct: Option<f64>,
    pub diff: Option<f64>,
    pub ratio: Option<f64>,

    pub bids: Vec<OrderBookLevel>,
    pub asks: Vec<OrderBookLevel>,

    #[serde(flatten)]
    pub extra: Extra,
}

const ORDER_BOOK_DEPTH: usize = 10;

fn extract_levels(raw: &Extra, price_prefix: &str, count_prefix: &str) -> Vec<OrderBookLevel> {
    let empty = |v: Option<f64>| v.is_none_or(|f| f == 0.0);
    (1..=ORDER_BOOK_DEPTH)
        .filter_map(|i| {
            let price = raw.get(&format!("{price_prefix}{i}")).and_then(value_f64);
            let count = raw.get(&format!("{count_prefix}{i}")).and_then(value_f64);
            (!(empty(price) && empty(count))).then_some(OrderBookLevel { price, count })
        })
        .collect()
}

impl From<Extra> for Pankou {
    fn from(mut raw: Extra) -> Self {
        let bids = match raw.remove("bids") {
            Some(v) => value_or_default(v),
            None => extract_levels(&raw, "bp", "bc"),
        };
        let asks = match raw.remove("asks") {
            Some(v) => value_or_default(v),
            None => extract_levels(&raw, "sp", "sc"),
        };
        let mut num = |key: &str| raw.remove(key).as_ref().and_then(value_f64);
        let current = num("current");
        let buypct = num("buypct");
        let sellpct = num("sellpct");
        let diff = num("diff");
        let ratio = num("ratio");
        let symbol = raw.remove("symbol").as_ref().and_then(value_string);
        let timestamp = raw.remove("timestamp").as_ref().and_then(wire::parse_datetime);

        Self {
            symbol,
            timestamp,
            current,
            buypct,
            sellpct,
            diff,
            ratio,
            bids,
            asks,
            extra: raw,
        }
    }
}
