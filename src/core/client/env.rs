//! Lenient readers for the `XUEQIU_*` environment variables.
//! Malformed values fall back to the caller's default instead of failing.

use super::auth::clean_cookie;
use super::constants::{ENV_COOKIE, ENV_TOKEN};
use std::env;

/// `XUEQIU_TOKEN`, then `XUEQIU_COOKIE`; blank values count as unset.
pub(crate) fn env_cookie() -> Option<String> {
    [ENV_TOKEN, ENV_COOKIE]
        .into_iter()
        .find_map(|name| clean_cookie(env::var(name).ok().as_deref()))
}

pub(crate) fn env_string(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn env_bool(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(v) => parse_bool(&v),
        Err(_) => default,
    }
}

pub(crate) fn env_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<i64>().ok())
        .map_or(default, |n| u32::try_from(n.max(0)).unwrap_or(u32::MAX))
}

pub(crate) fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|f| f.is_finite() && *f > 0.0)
        .unwrap_or(default)
}

/// `1`, `true`, `yes`, `y` and `on` (any case) are true; anything else is false.
pub fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}
