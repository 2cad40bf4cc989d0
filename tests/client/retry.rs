use crate::common;
use httpmock::Method::GET;
use std::time::Duration;
use xueqiu::core::client::{is_retryable_status, parse_retry_after};
use xueqiu::{RetryConfig, XqError};

const QUOTEC: &str = "/v5/stock/realtime/quotec.json";

#[tokio::test]
async fn server_errors_are_retried_until_exhausted() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(QUOTEC);
        then.status(503).body("busy");
    });

    let client = common::anon_client(&server);
    let err = client.realtime().quotec(["SH600000"]).await.unwrap_err();

    mock.assert_calls(3);
    assert_eq!(err.status(), Some(503));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(QUOTEC);
        then.status(404).body("nope");
    });

    let client = common::anon_client(&server);
    let err = client.realtime().quotec(["SH600000"]).await.unwrap_err();

    mock.assert_calls(1);
    match err {
        XqError::Status {
            status,
            method,
            url,
            body,
        } => {
            assert_eq!(status, 404);
            assert_eq!(method, "GET");
            assert!(url.contains("symbol=SH600000"), "url was {url}");
            assert_eq!(body.as_deref(), Some("nope"));
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn too_many_requests_honors_retry_after() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(QUOTEC);
        then.status(429).header("Retry-After", "0");
    });

    let client = common::builder(&server)
        .retry_config(RetryConfig {
            base: Duration::from_secs(30),
            max: Duration::from_secs(30),
            ..common::fast_retry(1)
        })
        .build()
        .unwrap();
    let started = std::time::Instant::now();
    let err = client.realtime().quotec(["SH600000"]).await.unwrap_err();

    mock.assert_calls(2);
    assert_eq!(err.status(), Some(429));
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn invalid_json_is_retried_then_reported() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(QUOTEC);
        then.status(200).body("<html>maintenance</html>");
    });

    let client = common::anon_client(&server);
    let err = client.realtime().quotec(["SH600000"]).await.unwrap_err();

    mock.assert_calls(3);
    match err {
        XqError::Decode { body, .. } => {
            assert_eq!(body.as_deref(), Some("<html>maintenance</html>"));
        }
        other => panic!("expected Decode, got {other:?}"),
    }
}

#[tokio::test]
async fn zero_retries_means_a_single_attempt() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(QUOTEC);
        then.status(500);
    });

    let client = common::builder(&server).max_retries(0).build().unwrap();
    assert_eq!(client.retry_config().max_retries, 0);
    let err = client.realtime().quotec(["SH600000"]).await.unwrap_err();

    mock.assert_calls(1);
    assert_eq!(err.status(), Some(500));
}

#[test]
fn backoff_doubles_and_caps() {
    let cfg = RetryConfig::default();
    assert_eq!(cfg.max_retries, 2);
    assert_eq!(cfg.backoff(0), Duration::from_millis(200));
    assert_eq!(cfg.backoff(1), Duration::from_millis(400));
    assert_eq!(cfg.backoff(4), Duration::from_millis(3200));
    assert_eq!(cfg.backoff(5), Duration::from_secs(4));
    assert_eq!(cfg.backoff(60), Duration::from_secs(4));
}

#[test]
fn retry_after_parsing() {
    assert_eq!(parse_retry_after("2"), Some(Duration::from_secs(2)));
    assert_eq!(parse_retry_after(" 0.5 "), Some(Duration::from_millis(500)));
    assert_eq!(parse_retry_after("-3"), Some(Duration::ZERO));
    assert_eq!(parse_retry_after("120"), Some(Duration::from_secs(120)));
    assert_eq!(parse_retry_after("Wed, 21 Oct 2015 07:28:00 GMT"), None);
    assert_eq!(parse_retry_after(""), None);
}

#[test]
fn retryable_statuses() {
    assert!(is_retryable_status(429));
    assert!(is_retryable_status(500));
    assert!(is_retryable_status(504));
    assert!(!is_retryable_status(400));
    assert!(!is_retryable_status(401));
    assert!(!is_retryable_status(404));
}
