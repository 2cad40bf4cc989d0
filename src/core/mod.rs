//! Core components of the `xueqiu` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The async [`XueqiuClient`], its builder, and the blocking twin.
//! - The primary [`XqError`] type.
//! - The [`ApiRequest`] description and the [`Transport`] trait both clients implement.
//! - The shared response envelope and lenient field decoders used by every model.

/// The clients (`XueqiuClient`, `blocking::XueqiuClient`), builder, and configuration.
pub mod client;
/// The common `{data, error_code, error_description}` envelope.
pub mod envelope;
/// The primary error type (`XqError`) for the crate.
pub mod error;
/// Request description and the `Transport` abstraction.
pub mod request;
/// Lenient decoders and the `parse_datetime` helper.
pub mod wire;

pub(crate) mod net;

pub use client::{RetryConfig, XueqiuClient, XueqiuClientBuilder};
pub use envelope::{XueqiuResponse, check_api_error};
pub use error::XqError;
pub use request::{ApiRequest, BoxFuture, Host, RequestOptions, Target, Transport};
pub use wire::{Extra, parse_datetime};
