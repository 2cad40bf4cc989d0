//! Blocking flavor of the client.
//!
//! Shares configuration, auth gating, retry decisions and error mapping with the
//! async client; only the I/O and the sleep between attempts differ.

use super::engine::{Attempt, ClientCore, Step, decode};
use super::{RetryConfig, XueqiuClientBuilder};
use crate::capital::CapitalApi;
use crate::core::net;
use crate::core::request::{ApiRequest, RequestOptions, Target, Transport};
use crate::core::XqError;
use crate::csindex::CsIndexApi;
use crate::cube::CubeApi;
use crate::danjuan::DanjuanApi;
use crate::eastmoney::EastmoneyApi;
use crate::f10::F10Api;
use crate::finance::FinanceApi;
use crate::portfolio::PortfolioApi;
use crate::realtime::RealtimeApi;
use crate::report::ReportApi;
use crate::suggest::SuggestApi;
use reqwest::Method;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, COOKIE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Blocking Xueqiu client.
///
/// Every endpoint method returns `Result<T, XqError>` directly.
#[derive(Debug, Clone)]
pub struct XueqiuClient {
    http: Client,
    core: ClientCore,
}

impl XueqiuClient {
    pub(super) fn from_parts(http: Client, core: ClientCore) -> Self {
        Self { http, core }
    }

    /// Create a new builder; finish it with [`XueqiuClientBuilder::build_blocking`].
    pub fn builder() -> XueqiuClientBuilder {
        XueqiuClientBuilder::default()
    }

    /// Build a blocking client configured from the `XUEQIU_*` environment variables.
    ///
    /// # Errors
    ///
    /// Fails when `XUEQIU_BASE_URL` is not a valid URL or the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, XqError> {
        XueqiuClientBuilder::from_env().build_blocking()
    }

    pub fn cookie(&self) -> Option<&str> {
        self.core.credentials.cookie()
    }

    pub fn has_auth(&self) -> bool {
        self.core.credentials.has_auth()
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.core.retry
    }

    pub fn realtime(&self) -> RealtimeApi<'_, Self> {
        RealtimeApi::new(self)
    }

    pub fn finance(&self) -> FinanceApi<'_, Self> {
        FinanceApi::new(self)
    }

    pub fn report(&self) -> ReportApi<'_, Self> {
        ReportApi::new(self)
    }

    pub fn capital(&self) -> CapitalApi<'_, Self> {
        CapitalApi::new(self)
    }

    pub fn f10(&self) -> F10Api<'_, Self> {
        F10Api::new(self)
    }

    pub fn portfolio(&self) -> PortfolioApi<'_, Self> {
        PortfolioApi::new(self)
    }

    pub fn cube(&self) -> CubeApi<'_, Self> {
        CubeApi::new(self)
    }

    pub fn suggest(&self) -> SuggestApi<'_, Self> {
        SuggestApi::new(self)
    }

    pub fn csindex(&self) -> CsIndexApi<'_, Self> {
        CsIndexApi::new(self)
    }

    pub fn danjuan(&self) -> DanjuanApi<'_, Self> {
        DanjuanApi::new(self)
    }

    pub fn eastmoney(&self) -> EastmoneyApi<'_, Self> {
        EastmoneyApi::new(self)
    }

    /// Raw JSON escape hatch. See [`crate::XueqiuClient::request_json`].
    ///
    /// # Errors
    ///
    /// See [`XqError`].
    pub fn request_json(
        &self,
        method: Method,
        target: &str,
        params: &[(&str, &str)],
        options: RequestOptions,
    ) -> Result<Value, XqError> {
        let req = ApiRequest::new(method, Target::parse(target))
            .params(params.iter().copied())
            .options(options);
        self.execute_json(req)
    }

    /// Raw request decoded into `T`.
    ///
    /// # Errors
    ///
    /// See [`XqError`].
    pub fn request_model<T: DeserializeOwned>(
        &self,
        method: Method,
        target: &str,
        params: &[(&str, &str)],
        options: RequestOptions,
    ) -> Result<T, XqError> {
        let req = ApiRequest::new(method, Target::parse(target))
            .params(params.iter().copied())
            .options(options);
        let (url, payload) = self.send_json(req)?;
        decode(url.as_str(), payload)
    }

    /// Execute a prepared request and return the JSON payload.
    ///
    /// # Errors
    ///
    /// See [`XqError`].
    pub fn execute_json(&self, req: ApiRequest) -> Result<Value, XqError> {
        self.send_json(req).map(|(_, payload)| payload)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, err, fields(method = %req.method, target = %req.target))
    )]
    fn send_json(&self, req: ApiRequest) -> Result<(Url, Value), XqError> {
        self.core.ensure_auth(&req)?;
        let url = self.core.resolve(&req)?;
        let method = req.method.as_str().to_ascii_uppercase();
        let cookie = self.core.cookie_header(&url);

        let mut attempt = 0;
        loop {
            let at = Attempt {
                method: &method,
                url: &url,
                attempt,
            };
            self.core.log_start(&at);

            let mut rb = self
                .http
                .request(req.method.clone(), url.clone())
                .header(ACCEPT, "application/json");
            if let Some(c) = &cookie {
                rb = rb.header(COOKIE, c.as_str());
            }

            let step = match rb.send() {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    let headers = resp.headers().clone();
                    match net::get_text_blocking(resp, &url) {
                        Ok(text) => self.core.on_response(
                            &at,
                            status,
                            &headers,
                            &text,
                            req.options.check_api_error,
                        ),
                        Err(e) => self.core.on_transport_error(&at, e),
                    }
                }
                Err(e) => self.core.on_transport_error(&at, e),
            };

            match step {
                Step::Done(payload) => return Ok((url, payload)),
                Step::Fail(e) => return Err(e),
                Step::Retry(delay) => {
                    std::thread::sleep(delay);
                    attempt += 1;
                }
            }
        }
    }
}

impl Transport for XueqiuClient {
    type Output<'a, T>
        = Result<T, XqError>
    where
        Self: 'a,
        T: 'a;

    fn execute<'a, T>(&'a self, req: ApiRequest) -> Result<T, XqError>
    where
        T: DeserializeOwned + Send + 'a,
    {
        let (url, payload) = self.send_json(req)?;
        decode(url.as_str(), payload)
    }
}
