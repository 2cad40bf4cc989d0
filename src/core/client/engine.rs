//! State and per-attempt decisions shared by the async and blocking clients.
//! The clients own the I/O; everything they decide goes through here.

use super::auth::Credentials;
use super::retry::{RetryConfig, is_retryable_status};
use crate::core::envelope::check_api_error;
use crate::core::error::truncate_body;
use crate::core::request::{ApiRequest, Host, Target};
use crate::core::XqError;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use url::Url;

#[derive(Clone, Debug)]
pub(crate) struct Bases {
    pub(crate) stock: Url,
    pub(crate) main: Url,
    pub(crate) csindex: Url,
    pub(crate) danjuan: Url,
    pub(crate) eastmoney: Url,
}

impl Bases {
    fn get(&self, host: Host) -> &Url {
        match host {
            Host::Stock => &self.stock,
            Host::Main => &self.main,
            Host::CsIndex => &self.csindex,
            Host::Danjuan => &self.danjuan,
            Host::Eastmoney => &self.eastmoney,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ClientCore {
    pub(crate) bases: Bases,
    pub(crate) credentials: Credentials,
    pub(crate) retry: RetryConfig,
    pub(crate) debug: bool,
}

/// Identity of one attempt, for logging and error construction.
pub(crate) struct Attempt<'r> {
    pub(crate) method: &'r str,
    pub(crate) url: &'r Url,
    pub(crate) attempt: u32,
}

/// What the client should do after one attempt.
pub(crate) enum Step {
    Done(Value),
    Retry(Duration),
    Fail(XqError),
}

impl ClientCore {
    pub(crate) fn ensure_auth(&self, req: &ApiRequest) -> Result<(), XqError> {
        if req.options.require_auth && !self.credentials.has_auth() {
            return Err(XqError::Auth(
                "This endpoint requires a Xueqiu cookie.".into(),
            ));
        }
        Ok(())
    }

    pub(crate) fn resolve(&self, req: &ApiRequest) -> Result<Url, XqError> {
        let mut url = match &req.target {
            Target::Absolute(raw) => Url::parse(raw)?,
            Target::Path(host, path) => {
                self.bases.get(*host).join(path.trim_start_matches('/'))?
            }
        };
        if !req.params.is_empty() {
            let mut qp = url.query_pairs_mut();
            for (k, v) in &req.params {
                qp.append_pair(k, v);
            }
        }
        Ok(url)
    }

    pub(crate) fn cookie_header(&self, url: &Url) -> Option<String> {
        self.credentials.header_for(url)
    }

    /// Decide on a response whose body has been read.
    pub(crate) fn on_response(
        &self,
        at: &Attempt<'_>,
        status: u16,
        headers: &HeaderMap,
        text: &str,
        check: bool,
    ) -> Step {
        let has_more = at.attempt < self.retry.max_retries;

        if status >= 400 {
            if is_retryable_status(status) && has_more {
                let delay = self.retry.status_delay(headers, at.attempt);
                self.log_retry(at, &format!("status={status}"), delay);
                return Step::Retry(delay);
            }
            return Step::Fail(XqError::Status {
                status,
                method: at.method.to_string(),
                url: at.url.to_string(),
                body: truncate_body(text),
            });
        }

        let payload: Value = match serde_json::from_str(text) {
            Ok(v) => v,
            Err(e) => {
                if has_more {
                    let delay = self.retry.backoff(at.attempt);
                    self.log_retry(at, &format!("error={e}"), delay);
                    return Step::Retry(delay);
                }
                return Step::Fail(XqError::Decode {
                    method: at.method.to_string(),
                    url: at.url.to_string(),
                    message: e.to_string(),
                    body: truncate_body(text),
                });
            }
        };

        if check && let Err(e) = check_api_error(&payload, at.method, at.url.as_str()) {
            return Step::Fail(e);
        }
        Step::Done(payload)
    }

    /// Decide on a request that never produced a readable response.
    pub(crate) fn on_transport_error(&self, at: &Attempt<'_>, err: reqwest::Error) -> Step {
        if at.attempt < self.retry.max_retries {
            let delay = self.retry.backoff(at.attempt);
            self.log_retry(at, &format!("error={err}"), delay);
            return Step::Retry(delay);
        }
        Step::Fail(XqError::Http(err))
    }

    pub(crate) fn log_start(&self, at: &Attempt<'_>) {
        #[cfg(feature = "tracing")]
        if self.debug {
            tracing::debug!(
                target: "xueqiu",
                method = at.method,
                url = %at.url,
                attempt = at.attempt,
                "xueqiu.request start"
            );
        }
        #[cfg(not(feature = "tracing"))]
        let _ = at;
    }

    fn log_retry(&self, at: &Attempt<'_>, reason: &str, delay: Duration) {
        #[cfg(feature = "tracing")]
        if self.debug {
            tracing::debug!(
                target: "xueqiu",
                method = at.method,
                url = %at.url,
                attempt = at.attempt,
                reason,
                sleep_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "xueqiu.request retry"
            );
        }
        #[cfg(not(feature = "tracing"))]
        let _ = (at, reason, delay);
    }
}

/// Map a JSON payload onto the requested model.
pub(crate) fn decode<T: DeserializeOwned>(url: &str, payload: Value) -> Result<T, XqError> {
    serde_json::from_value(payload).map_err(|e| XqError::Model {
        url: url.to_string(),
        message: e.to_string(),
    })
}
