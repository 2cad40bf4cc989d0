//! Centralized constants for default endpoints, UA and environment variables.

/// Default UA; identifies the SDK while looking enough like a browser.
pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (XueqiuAPI; +https://crates.io/crates/xueqiu-rs)";

/// Quote, finance, F10 and most other endpoints.
pub(crate) const DEFAULT_STOCK_BASE: &str = "https://stock.xueqiu.com";

/// Cubes and symbol suggestion live on the main site.
pub(crate) const DEFAULT_MAIN_BASE: &str = "https://xueqiu.com";

/// China Securities Index (中证指数).
pub(crate) const DEFAULT_CSINDEX_BASE: &str = "https://www.csindex.com.cn";

/// Danjuan funds (蛋卷基金).
pub(crate) const DEFAULT_DANJUAN_BASE: &str = "https://danjuanapp.com";

/// Eastmoney datacenter.
pub(crate) const DEFAULT_EASTMONEY_BASE: &str = "https://datacenter-web.eastmoney.com";

pub(crate) const DEFAULT_TIMEOUT_SECS: f64 = 10.0;
pub(crate) const DEFAULT_MAX_RETRIES: u32 = 2;

pub(crate) const ENV_TOKEN: &str = "XUEQIU_TOKEN";
pub(crate) const ENV_COOKIE: &str = "XUEQIU_COOKIE";
pub(crate) const ENV_BASE_URL: &str = "XUEQIU_BASE_URL";
pub(crate) const ENV_TIMEOUT: &str = "XUEQIU_TIMEOUT";
pub(crate) const ENV_MAX_RETRIES: &str = "XUEQIU_MAX_RETRIES";
pub(crate) const ENV_USER_AGENT: &str = "XUEQIU_USER_AGENT";
pub(crate) const ENV_DEBUG: &str = "XUEQIU_DEBUG";
