use crate::core::XqError;
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::fmt;

/// The upstream services this crate knows how to reach.
///
/// Each host maps to a base URL configured on the client builder, so tests and
/// proxies can point any of them somewhere else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Host {
    /// `stock.xueqiu.com`: quotes, finance, F10, capital, reports, portfolios.
    Stock,
    /// `xueqiu.com`: cubes and symbol suggestion.
    Main,
    /// `www.csindex.com.cn`.
    CsIndex,
    /// `danjuanapp.com`.
    Danjuan,
    /// `datacenter-web.eastmoney.com`.
    Eastmoney,
}

/// Where a request goes: a path on a known host, or a full URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Path(Host, String),
    Absolute(String),
}

impl Target {
    /// `http(s)://…` is taken verbatim; anything else is a path on the stock host.
    pub fn parse(target: &str) -> Self {
        if target.starts_with("http://") || target.starts_with("https://") {
            Target::Absolute(target.to_string())
        } else {
            Target::Path(Host::Stock, target.to_string())
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Path(host, path) => write!(f, "{host:?}:{path}"),
            Target::Absolute(url) => f.write_str(url),
        }
    }
}

/// Per-request switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestOptions {
    /// Fail with [`XqError::Auth`] before sending when no cookie is configured.
    pub require_auth: bool,
    /// Inspect the JSON envelope and turn upstream error codes into [`XqError::Api`].
    pub check_api_error: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            require_auth: false,
            check_api_error: true,
        }
    }
}

/// A fully described call: method, target, query and options.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) target: Target,
    pub(crate) params: Vec<(String, String)>,
    pub(crate) options: RequestOptions,
}

impl ApiRequest {
    pub fn new(method: Method, target: Target) -> Self {
        Self {
            method,
            target,
            params: Vec::new(),
            options: RequestOptions::default(),
        }
    }

    pub fn get(host: Host, path: impl Into<String>) -> Self {
        Self::new(Method::GET, Target::Path(host, path.into()))
    }

    /// Append a query parameter. Order is preserved.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    #[must_use]
    pub fn params<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        self.params
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.to_string())));
        self
    }

    #[must_use]
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Mark the endpoint as needing the Xueqiu cookie.
    #[must_use]
    pub fn require_auth(mut self) -> Self {
        self.options.require_auth = true;
        self
    }

    /// Skip envelope error detection (third-party hosts use other conventions).
    #[must_use]
    pub fn unchecked(mut self) -> Self {
        self.options.check_api_error = false;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn request_options(&self) -> RequestOptions {
        self.options
    }
}

/// Executes [`ApiRequest`]s and decodes the JSON into a model.
///
/// Implemented by the async [`XueqiuClient`](crate::XueqiuClient), whose output is a
/// boxed future, and by [`blocking::XueqiuClient`](crate::blocking::XueqiuClient),
/// whose output is the `Result` itself. Endpoint groups are written once against
/// this trait and serve both calling conventions.
pub trait Transport {
    /// What a call hands back: a future resolving to the result, or the result.
    type Output<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn execute<'a, T>(&'a self, req: ApiRequest) -> Self::Output<'a, T>
    where
        T: DeserializeOwned + Send + 'a;
}

/// Boxed future returned by the async client.
pub type BoxFuture<'a, T> = futures::future::BoxFuture<'a, Result<T, XqError>>;
