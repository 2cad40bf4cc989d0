use crate::core::wire::{self, Extra, alias_priority, value_f64, value_string};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A `[value, yoy]` pair as sent for most statement metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub value: Option<f64>,
    /// Year-over-year change.
    pub yoy: Option<f64>,
}

impl MetricValue {
    fn parse(raw: &Value) -> Option<Self> {
        let [value, yoy] = raw.as_array()?.as_slice() else {
            return None;
        };
        (is_number_like(value) && is_number_like(yoy)).then(|| Self {
            value: value_f64(value),
            yoy: value_f64(yoy),
        })
    }
}

fn is_number_like(value: &Value) -> bool {
    match value {
        Value::Null | Value::Number(_) => true,
        Value::String(s) => !s.trim().is_empty() && s.trim().parse::<f64>().is_ok(),
        _ => false,
    }
}

/// One reporting period with a dynamic set of metrics.
///
/// Every key whose value is a two-element array of numbers (or `null`) lands in
/// `metrics`; everything else stays in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Extra")]
pub struct FinanceMetricPeriod {
    pub report_date: Option<DateTime<Utc>>,
    pub report_name: Option<String>,
    pub metrics: BTreeMap<String, MetricValue>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl FinanceMetricPeriod {
    pub fn metric(&self, name: &str) -> Option<&MetricValue> {
        self.metrics.get(name)
    }
}

impl From<Extra> for FinanceMetricPeriod {
    fn from(raw: Extra) -> Self {
        let mut out = Self::default();
        for (key, value) in raw {
            match key.as_str() {
                "report_date" => out.report_date = wire::parse_datetime(&value),
                "report_name" => out.report_name = value_string(&value),
                _ => match MetricValue::parse(&value) {
                    Some(metric) => {
                        out.metrics.insert(key, metric);
                    }
                    None => {
                        out.extra.insert(key, value);
                    }
                },
            }
        }
        out
    }
}

/// Common shape of the indicator, balance, income and cash flow endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct FinanceMetricStatementData {
    #[serde(deserialize_with = "wire::opt_string")]
    pub quote_name: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub currency_name: Option<String>,
    #[serde(deserialize_with = "wire::opt_i64")]
    pub org_type: Option<i64>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub last_report_name: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub currency: Option<String>,
    #[serde(alias = "list", alias = "items", deserialize_with = "wire::list")]
    pub periods: Vec<FinanceMetricPeriod>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(FinanceMetricStatementData {
    ["list", "items", "periods"],
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessItem {
    #[serde(deserialize_with = "wire::opt_string")]
    pub project_announced_name: Option<String>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub prime_operating_income: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub income_ratio: Option<f64>,
    #[serde(deserialize_with = "wire::opt_f64")]
    pub gross_profit_rate: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessClass {
    /// 1 = by product, 2 = by industry, 3 = by region (upstream convention).
    #[serde(deserialize_with = "wire::opt_i64")]
    pub class_standard: Option<i64>,
    #[serde(deserialize_with = "wire::list")]
    pub business_list: Vec<BusinessItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessPeriod {
    #[serde(deserialize_with = "wire::opt_datetime")]
    pub report_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub report_name: Option<String>,
    #[serde(deserialize_with = "wire::list")]
    pub class_list: Vec<BusinessClass>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
#[serde(default)]
pub struct BusinessStatementData {
    #[serde(deserialize_with = "wire::opt_string")]
    pub quote_name: Option<String>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub currency: Option<String>,
    #[serde(alias = "list", deserialize_with = "wire::list")]
    pub periods: Vec<BusinessPeriod>,
    #[serde(flatten)]
    pub extra: Extra,
}

alias_priority!(BusinessStatementData {
    ["list", "periods"],
});
