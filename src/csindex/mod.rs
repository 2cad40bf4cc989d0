//! China Securities Index (中证指数) endpoints.
//!
//! Public data; no cookie is sent and the Xueqiu envelope check is skipped.

use crate::core::wire::{self, Extra};
use crate::core::{ApiRequest, Host, Transport};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Loose CSIndex payload; `code`, `msg` and friends stay in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsIndexResponse {
    pub data: Option<Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl CsIndexResponse {
    /// CSIndex answers `{"code": "200", "msg": ..., "success": true, "data": ...}`.
    pub fn success(&self) -> Option<bool> {
        self.extra.get("success").and_then(wire::value_bool)
    }
}

/// A date accepted by [`CsIndexApi::index_perf`], rendered as `YYYYMMDD`.
///
/// Strings are passed through untouched.
pub trait IndexDate {
    fn to_yyyymmdd(&self) -> String;
}

impl IndexDate for &str {
    fn to_yyyymmdd(&self) -> String {
        (*self).to_string()
    }
}

impl IndexDate for String {
    fn to_yyyymmdd(&self) -> String {
        self.clone()
    }
}

impl IndexDate for NaiveDate {
    fn to_yyyymmdd(&self) -> String {
        self.format("%Y%m%d").to_string()
    }
}

impl IndexDate for NaiveDateTime {
    fn to_yyyymmdd(&self) -> String {
        self.date().to_yyyymmdd()
    }
}

impl<Tz: TimeZone> IndexDate for DateTime<Tz> {
    fn to_yyyymmdd(&self) -> String {
        self.date_naive().to_yyyymmdd()
    }
}

const BASIC_INFO_PATH: &str = "/csindex-home/indexInfo/index-basic-info";
const DETAILS_DATA_PATH: &str = "/csindex-home/indexInfo/index-details-data";
const WEIGHT_TOP10_PATH: &str = "/csindex-home/index/weight/top10";
const PERF_PATH: &str = "/csindex-home/perf/index-perf";

fn csindex(path: impl Into<String>) -> ApiRequest {
    ApiRequest::get(Host::CsIndex, path).unchecked()
}

pub struct CsIndexApi<'a, C> {
    client: &'a C,
}

impl<'a, C: Transport + 'a> CsIndexApi<'a, C> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Index profile: name, base date, publisher, methodology.
    pub fn index_basic_info(&self, index_code: &str) -> C::Output<'a, CsIndexResponse> {
        self.client
            .execute(csindex(format!("{BASIC_INFO_PATH}/{index_code}")))
    }

    /// Index detail data; `file_lang` 1 is Chinese, 2 English.
    pub fn index_details_data(
        &self,
        index_code: &str,
        file_lang: u32,
    ) -> C::Output<'a, CsIndexResponse> {
        let req = csindex(DETAILS_DATA_PATH)
            .param("fileLang", file_lang)
            .param("indexCode", index_code);
        self.client.execute(req)
    }

    /// Ten largest constituents by weight.
    pub fn index_weight_top10(&self, index_code: &str) -> C::Output<'a, CsIndexResponse> {
        self.client
            .execute(csindex(format!("{WEIGHT_TOP10_PATH}/{index_code}")))
    }

    /// Daily performance between two dates (inclusive).
    pub fn index_perf(
        &self,
        index_code: &str,
        start_date: impl IndexDate,
        end_date: impl IndexDate,
    ) -> C::Output<'a, CsIndexResponse> {
        let req = csindex(PERF_PATH)
            .param("indexCode", index_code)
            .param("startDate", start_date.to_yyyymmdd())
            .param("endDate", end_date.to_yyyymmdd());
        self.client.execute(req)
    }
}
