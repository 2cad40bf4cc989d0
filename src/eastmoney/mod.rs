//! Eastmoney datacenter endpoints.

use crate::core::wire::{self, Extra};
use crate::core::{ApiRequest, Host, Transport};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DATACENTER_PATH: &str = "/api/data/v1/get";

/// Live quote fields joined onto `RPT_BOND_CB_LIST` rows.
const CONVERTIBLE_BOND_QUOTE_COLUMNS: &str = "f2~01~CONVERT_STOCK_CODE~CONVERT_STOCK_PRICE,\
f235~10~SECURITY_CODE~TRANSFER_PRICE,\
f236~10~SECURITY_CODE~TRANSFER_VALUE,\
f2~10~SECURITY_CODE~CURRENT_BOND_PRICE,\
f237~10~SECURITY_CODE~TRANSFER_PREMIUM_RATIO,\
f239~10~SECURITY_CODE~RESALE_TRIG_PRICE,\
f240~10~SECURITY_CODE~REDEEM_TRIG_PRICE,\
f23~01~CONVERT_STOCK_CODE~PBV_RATIO";

/// Loose datacenter payload. Rows live under `result.data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EastmoneyResponse {
    pub result: Option<Value>,
    #[serde(deserialize_with = "wire::opt_bool")]
    pub success: Option<bool>,
    #[serde(deserialize_with = "wire::opt_string")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl EastmoneyResponse {
    /// The row list at `result.data`, or an empty slice.
    pub fn rows(&self) -> &[Value] {
        self.result
            .as_ref()
            .and_then(|r| r.get("data"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

pub struct EastmoneyApi<'a, C> {
    client: &'a C,
}

impl<'a, C: Transport + 'a> EastmoneyApi<'a, C> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Convertible bond list, newest issue first, with live conversion quotes.
    pub fn convertible_bond(
        &self,
        page_size: u32,
        page_number: u32,
    ) -> C::Output<'a, EastmoneyResponse> {
        let req = ApiRequest::get(Host::Eastmoney, DATACENTER_PATH)
            .param("pageSize", page_size)
            .param("pageNumber", page_number)
            .param("sortColumns", "PUBLIC_START_DATE")
            .param("sortTypes", -1)
            .param("reportName", "RPT_BOND_CB_LIST")
            .param("columns", "ALL")
            .param("quoteColumns", CONVERTIBLE_BOND_QUOTE_COLUMNS)
            .param("source", "WEB")
            .param("client", "WEB")
            .unchecked();
        self.client.execute(req)
    }
}
