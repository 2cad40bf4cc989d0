use crate::core::wire::{self, Extra, alias_priority};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct SuggestStockItem {
    #[serde(alias = "symbol", deserialize_with = "wire::opt_string")]
    pub code: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub label: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub query: Option<String>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub state: Option<i64>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub stock_type: Option<i64>,
    #[serde(rename = "type", deserialize_with = "wire::opt_i64")]
    pub kind: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(SuggestStockItem {
    ["code", "symbol"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct SuggestStockMeta {
    #[serde(deserialize_with = "wire::opt_i64")]
    pub count: Option<i64>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub feedback: Option<i64>,
    #[serde(deserialize_with = "wire::opt_bool")]
    pub has_next_page: Option<bool>,
    #[serde(alias = "maxPage", deserialize_with = "wire::opt_i64")]
    pub max_page: Option<i64>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub page: Option<i64>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub query_id: Option<i64>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub size: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(SuggestStockMeta {
    ["maxPage", "max_page"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestStockResponse {
    #[serde(deserialize_with = "wire::opt_i64")]
    pub code: Option<i64>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub message: Option<String>,
    #[serde(deserialize_with = "wire::opt_bool")]
    pub success: Option<bool>,
    #[serde(deserialize_with = "suggest_items")]
    pub data: Vec<SuggestStockItem>,
    #[serde(deserialize_with = "wire::opt_object")]
    pub meta: Option<SuggestStockMeta>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// `data` is either the item list or `{"items": [...]}`.
fn suggest_items<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<SuggestStockItem>, D::Error> {
    let items = match Option::<Value>::deserialize(d)? {
        Some(Value::Object(mut map)) => map.remove("items").unwrap_or(Value::Null),
        Some(other) => other,
        None => Value::Null,
    };
    let Value::Array(items) = items else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect())
}
