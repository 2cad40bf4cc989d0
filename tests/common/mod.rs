#![allow(dead_code)]

use httpmock::MockServer;
use std::time::Duration;
use url::Url;
use xueqiu::{RetryConfig, XueqiuClient, XueqiuClientBuilder};

pub const COOKIE: &str = "xq_a_token=test-token; u=123";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn url(server: &MockServer) -> Url {
    Url::parse(&server.base_url()).unwrap()
}

/// Retries that finish in a few milliseconds.
pub fn fast_retry(max_retries: u32) -> RetryConfig {
    RetryConfig {
        max_retries,
        base: Duration::from_millis(1),
        max: Duration::from_millis(5),
        honor_retry_after: true,
    }
}

/// Every host pointed at `server`, no environment lookup, fast retries.
pub fn builder(server: &MockServer) -> XueqiuClientBuilder {
    let base = url(server);
    XueqiuClient::builder()
        .use_env(false)
        .base_url(base.clone())
        .main_base_url(base.clone())
        .csindex_base_url(base.clone())
        .danjuan_base_url(base.clone())
        .eastmoney_base_url(base)
        .retry_config(fast_retry(2))
}

pub fn client(server: &MockServer) -> XueqiuClient {
    builder(server).cookie(COOKIE).build().unwrap()
}

/// Xueqiu hosts on `xueqiu`, third-party hosts on `third_party`, with a cookie.
pub fn split_client(xueqiu: &MockServer, third_party: &MockServer) -> XueqiuClient {
    let other = url(third_party);
    builder(xueqiu)
        .csindex_base_url(other.clone())
        .danjuan_base_url(other.clone())
        .eastmoney_base_url(other)
        .cookie(COOKIE)
        .build()
        .unwrap()
}

pub fn anon_client(server: &MockServer) -> XueqiuClient {
    builder(server).build().unwrap()
}

pub fn blocking_client(server: &MockServer) -> xueqiu::blocking::XueqiuClient {
    builder(server).cookie(COOKIE).build_blocking().unwrap()
}

pub fn ok(data: serde_json::Value) -> String {
    serde_json::json!({ "data": data, "error_code": 0, "error_description": "" }).to_string()
}
