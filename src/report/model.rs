use crate::core::wire::{self, Extra, alias_priority};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EarningForecastItem {
    #[serde(deserialize_with = "wire::opt_string")]
    pub forecast_year: Option<String>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub eps: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub pe: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub pb: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub roe: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct EarningForecastData {
    #[serde(alias = "list", deserialize_with = "wire::list")]
    pub items: Vec<EarningForecastItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(EarningForecastData {
    ["list", "items"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstitutionRatingItem {
    #[serde(deserialize_with = "wire::opt_string")]
    pub title: Option<String>,
    /// Issuing brokerage.
    #[serde(deserialize_with = "wire::opt_string")]
    pub rpt_comp: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub rating_desc: Option<String>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub target_price_min: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub target_price_max: Option<f64>,
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub pub_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub status_id: Option<i64>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub retweet_count: Option<i64>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub reply_count: Option<i64>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub like_count: Option<i64>,
    #[serde(deserialize_with = "wire::opt_bool")]
    pub liked: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct InstitutionRatingData {
    #[serde(alias = "list", deserialize_with = "wire::list")]
    pub items: Vec<InstitutionRatingItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(InstitutionRatingData {
    ["list", "items"],
});
