use crate::core::wire::{self, Extra, alias_priority};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeNavPoint {
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub value: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub percent: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct CubeNavSeries {
    #[serde(deserialize_with = "wire::opt_string")]
    pub symbol: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub name: Option<String>,
    #[serde(alias = "list", deserialize_with = "wire::list")]
    pub items: Vec<CubeNavPoint>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(CubeNavSeries {
    ["list", "items"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeRebalancingHistoryItem {
    #[serde(deserialize_with = "wire::opt_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub rebalancing_id: Option<i64>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub stock_id: Option<i64>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub stock_name: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub stock_symbol: Option<String>,

    #[serde(deserialize_with = "wire::opt_f64")]
    pub volume: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub net_value: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub weight: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub target_weight: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub prev_weight: Option<f64>,
    #[serde(deserialize_with = "wire::opt_bool")]
    pub proactive: Option<bool>,

    #[serde(deserialize_with = "wire::opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeHolding {
    #[serde(deserialize_with = "wire::opt_i64")]
    pub stock_id: Option<i64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub weight: Option<f64>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub segment_name: Option<String>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub segment_id: Option<i64>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub stock_name: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub stock_symbol: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub segment_color: Option<String>,
    #[serde(deserialize_with = "wire::opt_bool")]
    pub proactive: Option<bool>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub volume: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One rebalancing operation of a cube.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct CubeRebalancing {
    #[serde(deserialize_with = "wire::opt_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub cube_id: Option<i64>,
    /// Upstream misspells this key as `prev_bebalancing_id`.
    #[serde(alias = "prev_bebalancing_id", deserialize_with = "wire::opt_i64")]
    pub prev_rebalancing_id: Option<i64>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub category: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub exe_strategy: Option<String>,

    #[serde(deserialize_with = "wire::opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(deserialize_with = "wire::opt_f64")]
    pub cash: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub cash_value: Option<f64>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub error_code: Option<i64>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub error_message: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub error_status: Option<String>,

    #[serde(deserialize_with = "wire::opt_list")]
    pub holdings: Option<Vec<CubeHolding>>,
    #[serde(deserialize_with = "wire::list")]
    pub rebalancing_histories: Vec<CubeRebalancingHistoryItem>,

    #[serde(deserialize_with = "wire::opt_string")]
    pub comment: Option<String>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub diff: Option<f64>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub new_buy_count: Option<i64>,

    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(CubeRebalancing {
    ["prev_bebalancing_id", "prev_rebalancing_id"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct CubeRebalancingHistoryData {
    #[serde(deserialize_with = "wire::opt_i64")]
    pub count: Option<i64>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub page: Option<i64>,
    #[serde(alias = "totalCount", deserialize_with = "wire::opt_i64")]
    pub total_count: Option<i64>,
    #[serde(alias = "list", deserialize_with = "wire::list")]
    pub items: Vec<CubeRebalancing>,
    #[serde(alias = "maxPage", deserialize_with = "wire::opt_i64")]
    pub max_page: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(CubeRebalancingHistoryData {
    ["totalCount", "total_count"],
    ["list", "items"],
    ["maxPage", "max_page"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeRebalancingCurrentData {
    #[serde(deserialize_with = "wire::opt_object")]
    pub last_rb: Option<CubeRebalancing>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeQuote {
    #[serde(deserialize_with = "wire::opt_string")]
    pub symbol: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub market: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub name: Option<String>,

    #[serde(deserialize_with = "wire::opt_f64")]
    pub net_value: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub daily_gain: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub monthly_gain: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub total_gain: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub annualized_gain: Option<f64>,

    #[serde(deserialize_with = "wire::opt_bool")]
    pub hasexist: Option<bool>,
    #[serde(deserialize_with = "wire::opt_bool")]
    pub badges_exist: Option<bool>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub game_id: Option<i64>,

    #[serde(deserialize_with = "wire::opt_datetime")]
    pub closed_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Extra,
}
