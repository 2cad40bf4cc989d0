//! xueqiu-rs: typed, tolerant client for the unofficial Xueqiu (雪球) web API.
//!
//! Both an async client ([`XueqiuClient`]) and a blocking one
//! ([`blocking::XueqiuClient`]) are provided. Endpoint groups are reached through
//! accessors on either client and return the same models:
//!
//! ```no_run
//! # async fn run() -> Result<(), xueqiu::XqError> {
//! let client = xueqiu::XueqiuClient::from_env()?;
//! let resp = client.realtime().quotec(["SH600000", "SZ000001"]).await?;
//! for q in resp.data.unwrap_or_default() {
//!     println!("{} {:?}", q.symbol, q.current);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Besides Xueqiu itself, a few related public sources are wrapped: CSIndex,
//! Danjuan funds and the Eastmoney datacenter. Those hosts never receive the
//! Xueqiu cookie.

pub mod core;

pub mod capital;
pub mod csindex;
pub mod cube;
pub mod danjuan;
pub mod eastmoney;
pub mod f10;
pub mod finance;
pub mod portfolio;
pub mod realtime;
pub mod report;
pub mod suggest;

pub use core::client::blocking;

pub use core::{
    ApiRequest, Extra, Host, RequestOptions, RetryConfig, Target, Transport, XqError,
    XueqiuClient, XueqiuClientBuilder, XueqiuResponse, check_api_error, parse_datetime,
};

pub use reqwest::Method;

#[cfg(feature = "test-mode")]
pub use core::net::fixtures;
