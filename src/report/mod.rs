//! Broker research: institution ratings and earnings forecasts.

mod model;

pub use model::{
    EarningForecastData, EarningForecastItem, InstitutionRatingData, InstitutionRatingItem,
};

use crate::core::{ApiRequest, Host, Transport, XueqiuResponse};

const LATEST_PATH: &str = "/stock/report/latest.json";
const EARNING_FORECAST_PATH: &str = "/stock/report/earningforecast.json";

pub struct ReportApi<'a, C> {
    client: &'a C,
}

impl<'a, C: Transport + 'a> ReportApi<'a, C> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Latest institution ratings and target prices.
    pub fn latest(&self, symbol: &str) -> C::Output<'a, XueqiuResponse<InstitutionRatingData>> {
        self.client.execute(by_symbol(LATEST_PATH, symbol))
    }

    /// Consensus EPS/PE/PB/ROE forecasts by year.
    pub fn earning_forecast(
        &self,
        symbol: &str,
    ) -> C::Output<'a, XueqiuResponse<EarningForecastData>> {
        self.client.execute(by_symbol(EARNING_FORECAST_PATH, symbol))
    }
}

fn by_symbol(path: &str, symbol: &str) -> ApiRequest {
    ApiRequest::get(Host::Stock, path)
        .param("symbol", symbol)
        .require_auth()
}
