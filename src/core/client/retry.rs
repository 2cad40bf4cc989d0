use reqwest::header::{HeaderMap, RETRY_AFTER};
use std::time::Duration;

/// Configuration for the automatic retry mechanism shared by both clients.
///
/// Every request is attempted at most `max_retries + 1` times. Retries happen on
/// transport errors, undecodable bodies, HTTP 429 and any 5xx status. Other
/// statuses fail immediately.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// The maximum number of retries after the first attempt.
    pub max_retries: u32,
    /// The delay before the first retry. Doubles on every subsequent retry.
    pub base: Duration,
    /// The ceiling for the computed delay.
    pub max: Duration,
    /// Whether a `Retry-After` header on 429/5xx replaces the computed delay.
    pub honor_retry_after: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: super::constants::DEFAULT_MAX_RETRIES,
            base: Duration::from_millis(200),
            max: Duration::from_secs(4),
            honor_retry_after: true,
        }
    }
}

impl RetryConfig {
    /// Exponential delay for the given zero-based attempt: `min(base * 2^attempt, max)`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base
            .checked_mul(1u32 << attempt.min(31))
            .map_or(self.max, |d| d.min(self.max))
    }

    /// Delay before retrying a failed status: the `Retry-After` value when present
    /// and usable, otherwise [`RetryConfig::backoff`].
    pub(crate) fn status_delay(&self, headers: &HeaderMap, attempt: u32) -> Duration {
        if self.honor_retry_after
            && let Some(d) = retry_after(headers)
        {
            return d;
        }
        self.backoff(attempt)
    }
}

/// 429 and every 5xx are worth another attempt.
pub fn is_retryable_status(status: u16) -> bool {
    status == 429 || status >= 500
}

/// Parse a `Retry-After` header given in (possibly fractional) seconds.
/// Negative values clamp to zero; HTTP dates are ignored.
pub fn parse_retry_after(value: &str) -> Option<Duration> {
    let secs: f64 = value.trim().parse().ok()?;
    Duration::try_from_secs_f64(secs.max(0.0)).ok()
}

fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    let value = headers.get(RETRY_AFTER)?.to_str().ok()?;
    parse_retry_after(value)
}
