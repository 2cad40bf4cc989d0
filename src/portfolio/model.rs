use crate::core::wire::{self, Extra, alias_priority};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioListItem {
    #[serde(deserialize_with = "wire::opt_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub order_id: Option<i64>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub category: Option<i64>,
    #[serde(deserialize_with = "wire::opt_bool")]
    pub include: Option<bool>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub symbol_count: Option<i64>,
    #[serde(rename = "type", deserialize_with = "wire::opt_i64")]
    pub kind: Option<i64>,
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct PortfolioListData {
    #[serde(deserialize_with = "wire::list")]
    pub cubes: Vec<PortfolioListItem>,
    #[serde(deserialize_with = "wire::list")]
    pub funds: Vec<PortfolioListItem>,
    #[serde(deserialize_with = "wire::list")]
    pub stocks: Vec<PortfolioListItem>,
    #[serde(alias = "mutualFunds", deserialize_with = "wire::list")]
    pub mutual_funds: Vec<PortfolioListItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(PortfolioListData {
    ["mutualFunds", "mutual_funds"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioStockItem {
    #[serde(deserialize_with = "wire::opt_string")]
    pub symbol: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub name: Option<String>,
    #[serde(rename = "type", deserialize_with = "wire::opt_i64")]
    pub kind: Option<i64>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub remark: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub exchange: Option<String>,
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub created: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioStocksData {
    #[serde(deserialize_with = "wire::opt_i64")]
    pub pid: Option<i64>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub category: Option<i64>,
    #[serde(deserialize_with = "wire::list")]
    pub stocks: Vec<PortfolioStockItem>,
    #[serde(flatten)]
    pub extra: Extra,
}
