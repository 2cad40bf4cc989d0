use crate::core::wire::{self, Extra, alias_priority};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct MarginItem {
    #[serde(deserialize_with = "wire::opt_f64")]
    pub margin_trading_amt_balance: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub short_selling_amt_balance: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub margin_trading_balance: Option<f64>,
    #[serde(alias = "td_date", deserialize_with = "wire::opt_datetime")]
    pub trade_date: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(MarginItem {
    ["td_date", "trade_date"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginData {
    #[serde(deserialize_with = "wire::list")]
    pub items: Vec<MarginItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct BlocktransItem {
    #[serde(alias = "vol", deserialize_with = "wire::opt_f64")]
    pub volume: Option<f64>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub sell_branch_org_name: Option<String>,
    #[serde(alias = "premium_rat", deserialize_with = "wire::opt_f64")]
    pub premium_rate: Option<f64>,
    #[serde(alias = "trans_amt", deserialize_with = "wire::opt_f64")]
    pub transaction_amount: Option<f64>,
    #[serde(alias = "td_date", deserialize_with = "wire::opt_datetime")]
    pub trade_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub buy_branch_org_name: Option<String>,
    #[serde(alias = "trans_price", deserialize_with = "wire::opt_f64")]
    pub transaction_price: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(BlocktransItem {
    ["vol", "volume"],
    ["premium_rat", "premium_rate"],
    ["trans_amt", "transaction_amount"],
    ["td_date", "trade_date"],
    ["trans_price", "transaction_price"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlocktransData {
    #[serde(deserialize_with = "wire::list")]
    pub items: Vec<BlocktransItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapitalAssortData {
    #[serde(deserialize_with = "wire::opt_f64")]
    pub sell_large: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub sell_medium: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub sell_small: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub sell_total: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub buy_large: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub buy_medium: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub buy_small: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub buy_total: Option<f64>,

    #[serde(deserialize_with = "wire::opt_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapitalFlowItem {
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub amount: Option<f64>,
    #[serde(rename = "type", deserialize_with = "wire::opt_string")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapitalFlowData {
    #[serde(deserialize_with = "wire::opt_string")]
    pub symbol: Option<String>,
    #[serde(deserialize_with = "wire::list")]
    pub items: Vec<CapitalFlowItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapitalHistoryItem {
    #[serde(deserialize_with = "wire::opt_f64")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct CapitalHistoryData {
    #[serde(alias = "sum3", deserialize_with = "wire::opt_f64")]
    pub sum_3d: Option<f64>,
    #[serde(alias = "sum5", deserialize_with = "wire::opt_f64")]
    pub sum_5d: Option<f64>,
    #[serde(alias = "sum10", deserialize_with = "wire::opt_f64")]
    pub sum_10d: Option<f64>,
    #[serde(alias = "sum20", deserialize_with = "wire::opt_f64")]
    pub sum_20d: Option<f64>,
    #[serde(deserialize_with = "wire::list")]
    pub items: Vec<CapitalHistoryItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(CapitalHistoryData {
    ["sum3", "sum_3d"],
    ["sum5", "sum_5d"],
    ["sum10", "sum_10d"],
    ["sum20", "sum_20d"],
});
