//! Public client surface + builder.
//! Internals are split into `auth` (cookie gating), `engine` (per-attempt decisions),
//! `retry` (backoff), `env` (environment variables) and `constants` (UA + defaults).

mod auth;
pub mod blocking;
mod constants;
mod engine;
mod env;
pub(crate) mod retry;

pub use auth::{clean_cookie, is_xueqiu_host};
pub use env::parse_bool;
pub use retry::{RetryConfig, is_retryable_status, parse_retry_after};

use crate::capital::CapitalApi;
use crate::core::net;
use crate::core::request::{ApiRequest, BoxFuture, RequestOptions, Target, Transport};
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
use auth::Credentials;
use constants::{
    DEFAULT_CSINDEX_BASE, DEFAULT_DANJUAN_BASE, DEFAULT_EASTMONEY_BASE, DEFAULT_MAIN_BASE,
    DEFAULT_MAX_RETRIES, DEFAULT_STOCK_BASE, DEFAULT_TIMEOUT_SECS, ENV_BASE_URL, ENV_DEBUG,
    ENV_MAX_RETRIES, ENV_TIMEOUT, ENV_USER_AGENT, USER_AGENT,
};
use engine::{Attempt, Bases, ClientCore, Step, decode};
use reqwest::header::{ACCEPT, COOKIE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

/// Asynchronous Xueqiu client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct XueqiuClient {
    http: Client,
    core: ClientCore,
}

impl Default for XueqiuClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl XueqiuClient {
    /// Create a new builder.
    pub fn builder() -> XueqiuClientBuilder {
        XueqiuClientBuilder::default()
    }

    /// Build a client configured from the `XUEQIU_*` environment variables.
    ///
    /// # Errors
    ///
    /// Fails when `XUEQIU_BASE_URL` is not a valid URL or the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, XqError> {
        XueqiuClientBuilder::from_env().build()
    }

    /// The raw cookie string in use, if one was configured.
    pub fn cookie(&self) -> Option<&str> {
        self.core.credentials.cookie()
    }

    /// Whether a cookie string or cookie map is configured.
    pub fn has_auth(&self) -> bool {
        self.core.credentials.has_auth()
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.core.retry
    }

    /// Quotes, order book and candles.
    pub fn realtime(&self) -> RealtimeApi<'_, Self> {
        RealtimeApi::new(self)
    }

    /// Financial statements.
    pub fn finance(&self) -> FinanceApi<'_, Self> {
        FinanceApi::new(self)
    }

    pub fn report(&self) -> ReportApi<'_, Self> {
        ReportApi::new(self)
    }

    pub fn capital(&self) -> CapitalApi<'_, Self> {
        CapitalApi::new(self)
    }

    /// Company profile data: holders, dividends, management, industry.
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

    /// China Securities Index endpoints (no cookie needed).
    pub fn csindex(&self) -> CsIndexApi<'_, Self> {
        CsIndexApi::new(self)
    }

    /// Danjuan fund endpoints (no cookie needed).
    pub fn danjuan(&self) -> DanjuanApi<'_, Self> {
        DanjuanApi::new(self)
    }

    /// Eastmoney data center endpoints (no cookie needed).
    pub fn eastmoney(&self) -> EastmoneyApi<'_, Self> {
        EastmoneyApi::new(self)
    }

    /// Raw JSON escape hatch for endpoints that are not modeled (yet).
    ///
    /// `target` is either a full `http(s)://` URL or a path on the stock host.
    ///
    /// # Errors
    ///
    /// See [`XqError`]; envelope errors are only raised when `options.check_api_error` is set.
    pub async fn request_json(
        &self,
        method: Method,
        target: &str,
        params: &[(&str, &str)],
        options: RequestOptions,
    ) -> Result<Value, XqError> {
        let req = ApiRequest::new(method, Target::parse(target))
            .params(params.iter().copied())
            .options(options);
        self.execute_json(req).await
    }

    /// Like [`XueqiuClient::request_json`], decoding into `T`.
    ///
    /// # Errors
    ///
    /// As [`XueqiuClient::request_json`], plus [`XqError::Model`] when the JSON does not fit `T`.
    pub async fn request_model<T: DeserializeOwned>(
        &self,
        method: Method,
        target: &str,
        params: &[(&str, &str)],
        options: RequestOptions,
    ) -> Result<T, XqError> {
        let req = ApiRequest::new(method, Target::parse(target))
            .params(params.iter().copied())
            .options(options);
        let (url, payload) = self.send_json(req).await?;
        decode(url.as_str(), payload)
    }

    /// Execute a prepared request and return the JSON payload.
    ///
    /// # Errors
    ///
    /// See [`XqError`].
    pub async fn execute_json(&self, req: ApiRequest) -> Result<Value, XqError> {
        self.send_json(req).await.map(|(_, payload)| payload)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, err, fields(method = %req.method, target = %req.target))
    )]
    async fn send_json(&self, req: ApiRequest) -> Result<(Url, Value), XqError> {
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

            let step = match rb.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    let headers = resp.headers().clone();
                    match net::get_text(resp, &url).await {
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
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

impl Transport for XueqiuClient {
    type Output<'a, T>
        = BoxFuture<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn execute<'a, T>(&'a self, req: ApiRequest) -> BoxFuture<'a, T>
    where
        T: DeserializeOwned + Send + 'a,
    {
        Box::pin(async move {
            let (url, payload) = self.send_json(req).await?;
            decode(url.as_str(), payload)
        })
    }
}

/* ----------------------- Builder ----------------------- */

/// Configures and builds either client flavor.
///
/// ```no_run
/// # async fn run() -> Result<(), xueqiu::XqError> {
/// let client = xueqiu::XueqiuClient::builder()
///     .cookie("xq_a_token=...; u=...")
///     .max_retries(3)
///     .build()?;
/// let quotes = client.realtime().quotec(["SH600000"]).await?;
/// # let _ = quotes;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct XueqiuClientBuilder {
    cookie: Option<String>,
    cookies: Option<BTreeMap<String, String>>,
    use_env: Option<bool>,

    base_url: Option<Url>,
    env_base_url: Option<String>,
    main_base_url: Option<Url>,
    csindex_base_url: Option<Url>,
    danjuan_base_url: Option<Url>,
    eastmoney_base_url: Option<Url>,

    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    max_retries: Option<u32>,
    retry: Option<RetryConfig>,
    debug: Option<bool>,

    custom_client: Option<Client>,
    custom_blocking_client: Option<reqwest::blocking::Client>,
}

impl XueqiuClientBuilder {
    /// A builder pre-filled from `XUEQIU_TOKEN`/`XUEQIU_COOKIE`, `XUEQIU_BASE_URL`,
    /// `XUEQIU_TIMEOUT`, `XUEQIU_MAX_RETRIES`, `XUEQIU_USER_AGENT` and `XUEQIU_DEBUG`.
    /// Setters called afterwards take precedence.
    pub fn from_env() -> Self {
        Self {
            cookie: env::env_cookie(),
            use_env: Some(false),
            env_base_url: env::env_string(ENV_BASE_URL),
            user_agent: env::env_string(ENV_USER_AGENT),
            timeout: Duration::try_from_secs_f64(env::env_f64(ENV_TIMEOUT, DEFAULT_TIMEOUT_SECS))
                .ok(),
            max_retries: Some(env::env_u32(ENV_MAX_RETRIES, DEFAULT_MAX_RETRIES)),
            debug: Some(env::env_bool(ENV_DEBUG, false)),
            ..Self::default()
        }
    }

    /// Raw `Cookie` header value, e.g. `xq_a_token=...; u=...`. Blank strings are ignored.
    pub fn cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    /// Individual cookies; used only when no raw cookie string is set.
    pub fn cookies<I, K, V>(mut self, cookies: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.cookies = Some(
            cookies
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Whether to fall back to `XUEQIU_TOKEN`/`XUEQIU_COOKIE` when no cookie is given. Default: true.
    pub fn use_env(mut self, yes: bool) -> Self {
        self.use_env = Some(yes);
        self
    }

    /// Override the stock API base (default `https://stock.xueqiu.com`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the main site base (default `https://xueqiu.com`).
    pub fn main_base_url(mut self, url: Url) -> Self {
        self.main_base_url = Some(url);
        self
    }

    /// Override the CSIndex base (default `https://www.csindex.com.cn`).
    pub fn csindex_base_url(mut self, url: Url) -> Self {
        self.csindex_base_url = Some(url);
        self
    }

    /// Override the Danjuan base (default `https://danjuanapp.com`).
    pub fn danjuan_base_url(mut self, url: Url) -> Self {
        self.danjuan_base_url = Some(url);
        self
    }

    /// Override the Eastmoney datacenter base (default `https://datacenter-web.eastmoney.com`).
    pub fn eastmoney_base_url(mut self, url: Url) -> Self {
        self.eastmoney_base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set the overall request timeout. Default: 10 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Retries after the first attempt. Default: 2.
    pub fn max_retries(mut self, n: u32) -> Self {
        self.max_retries = Some(n);
        self
    }

    /// Replace the whole retry policy. `max_retries`, when also set, still wins.
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Emit per-attempt `tracing` debug events under the `xueqiu` target.
    pub fn debug(mut self, yes: bool) -> Self {
        self.debug = Some(yes);
        self
    }

    /// Use a preconfigured async HTTP client. UA and timeouts from this builder are not applied to it.
    pub fn custom_client(mut self, client: Client) -> Self {
        self.custom_client = Some(client);
        self
    }

    /// Use a preconfigured blocking HTTP client. UA and timeouts from this builder are not applied to it.
    pub fn custom_blocking_client(mut self, client: reqwest::blocking::Client) -> Self {
        self.custom_blocking_client = Some(client);
        self
    }

    /// Build the async client.
    ///
    /// # Errors
    ///
    /// Fails when a base URL is invalid or the HTTP client cannot be built.
    pub fn build(mut self) -> Result<XueqiuClient, XqError> {
        let core = self.core()?;
        let http = match self.custom_client.take() {
            Some(c) => c,
            None => {
                let mut httpb = Client::builder()
                    .user_agent(self.user_agent_str())
                    .timeout(self.timeout_dur());
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }
                httpb.build()?
            }
        };
        Ok(XueqiuClient { http, core })
    }

    /// Build the blocking client.
    ///
    /// Must not be called from within an async runtime; the blocking HTTP client
    /// owns its own.
    ///
    /// # Errors
    ///
    /// Fails when a base URL is invalid or the HTTP client cannot be built.
    pub fn build_blocking(mut self) -> Result<blocking::XueqiuClient, XqError> {
        let core = self.core()?;
        let http = match self.custom_blocking_client.take() {
            Some(c) => c,
            None => {
                let mut httpb = reqwest::blocking::Client::builder()
                    .user_agent(self.user_agent_str())
                    .timeout(self.timeout_dur());
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }
                httpb.build()?
            }
        };
        Ok(blocking::XueqiuClient::from_parts(http, core))
    }

    fn user_agent_str(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(USER_AGENT)
    }

    fn timeout_dur(&self) -> Duration {
        self.timeout
            .unwrap_or_else(|| Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS))
    }

    fn core(&self) -> Result<ClientCore, XqError> {
        let stock = match (&self.base_url, &self.env_base_url) {
            (Some(u), _) => u.clone(),
            (None, Some(raw)) => Url::parse(raw)?,
            (None, None) => Url::parse(DEFAULT_STOCK_BASE)?,
        };
        let bases = Bases {
            main: or_default(&self.main_base_url, DEFAULT_MAIN_BASE)?,
            csindex: or_default(&self.csindex_base_url, DEFAULT_CSINDEX_BASE)?,
            danjuan: or_default(&self.danjuan_base_url, DEFAULT_DANJUAN_BASE)?,
            eastmoney: or_default(&self.eastmoney_base_url, DEFAULT_EASTMONEY_BASE)?,
            stock: as_directory(stock),
        };

        let mut cookie = clean_cookie(self.cookie.as_deref());
        let cookies = self.cookies.clone().filter(|m| !m.is_empty());
        if cookie.is_none() && cookies.is_none() && self.use_env.unwrap_or(true) {
            cookie = env::env_cookie();
        }
        let credentials = Credentials::new(cookie, cookies, &[&bases.stock, &bases.main]);

        let mut retry = self.retry.clone().unwrap_or_default();
        if let Some(n) = self.max_retries {
            retry.max_retries = n;
        }

        Ok(ClientCore {
            bases,
            credentials,
            retry,
            debug: self.debug.unwrap_or(false),
        })
    }
}

fn or_default(url: &Option<Url>, fallback: &str) -> Result<Url, XqError> {
    match url {
        Some(u) => Ok(as_directory(u.clone())),
        None => Ok(as_directory(Url::parse(fallback)?)),
    }
}

/// End the base path with `/` so endpoint paths join below it, not beside it.
fn as_directory(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
