use crate::common;
use httpmock::Method::GET;
use xueqiu::{Method, RequestOptions, XqError};

const PANKOU: &str = "/v5/stock/realtime/pankou.json";

#[tokio::test]
async fn non_zero_error_code_becomes_api_error() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path(PANKOU);
        then.status(200).body(
            r#"{"data":null,"error_code":400016,"error_description":"遇到错误，请刷新页面或者重新登录帐号后再试"}"#,
        );
    });

    let client = common::client(&server);
    let err = client.realtime().pankou("SH600000").await.unwrap_err();

    assert_eq!(err.api_code(), Some(400_016));
    assert!(!err.is_retryable());
    match err {
        XqError::Api {
            description,
            method,
            payload,
            ..
        } => {
            assert!(description.unwrap().contains("重新登录"));
            assert_eq!(method, "GET");
            assert_eq!(payload["error_code"], 400_016);
        }
        other => panic!("expected Api, got {other:?}"),
    }
}

#[tokio::test]
async fn success_false_becomes_api_error() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path(PANKOU);
        then.status(200)
            .body(r#"{"success":false,"code":"60201","message":"symbol not found"}"#);
    });

    let client = common::client(&server);
    let err = client.realtime().pankou("SH600000").await.unwrap_err();

    match err {
        XqError::Api {
            code, description, ..
        } => {
            assert_eq!(code, 60201);
            assert_eq!(description.as_deref(), Some("symbol not found"));
        }
        other => panic!("expected Api, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_error_code_is_not_an_error() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path(PANKOU);
        then.status(200)
            .body(r#"{"data":{"symbol":"SH600000"},"error_code":"n/a"}"#);
    });

    let client = common::client(&server);
    let resp = client.realtime().pankou("SH600000").await.unwrap();

    assert_eq!(resp.data.unwrap().symbol.as_deref(), Some("SH600000"));
}

#[tokio::test]
async fn unchecked_requests_return_error_payloads() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v5/stock/anything.json");
        then.status(200)
            .body(r#"{"error_code":1,"error_description":"bad"}"#);
    });

    let client = common::client(&server);
    let options = RequestOptions {
        require_auth: false,
        check_api_error: false,
    };
    let value = client
        .request_json(Method::GET, "/v5/stock/anything.json", &[], options)
        .await
        .unwrap();

    assert_eq!(value["error_description"], "bad");
}

#[tokio::test]
async fn shape_mismatch_becomes_model_error() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v5/stock/odd.json");
        then.status(200).body(r#"{"data":{"not":"a list"}}"#);
    });

    let client = common::client(&server);
    let err = client
        .request_model::<Vec<i64>>(Method::GET, "/v5/stock/odd.json", &[], RequestOptions::default())
        .await
        .unwrap_err();

    match err {
        XqError::Model { url, .. } => assert!(url.ends_with("/v5/stock/odd.json")),
        other => panic!("expected Model, got {other:?}"),
    }
}

#[tokio::test]
async fn long_error_bodies_are_truncated() {
    let server = common::setup_server();
    let body = "x".repeat(5000);
    server.mock(|when, then| {
        when.method(GET).path(PANKOU);
        then.status(403).body(body.clone());
    });

    let client = common::client(&server);
    let err = client.realtime().pankou("SH600000").await.unwrap_err();

    match err {
        XqError::Status { body, .. } => assert_eq!(body.unwrap().chars().count(), 2000),
        other => panic!("expected Status, got {other:?}"),
    }
}

#[test]
fn error_messages_carry_context() {
    let err = XqError::Status {
        status: 502,
        method: "GET".into(),
        url: "https://stock.xueqiu.com/v5/stock/quote.json".into(),
        body: Some("bad gateway".into()),
    };
    assert_eq!(
        err.to_string(),
        "HTTP 502 for GET https://stock.xueqiu.com/v5/stock/quote.json: bad gateway"
    );

    let err = XqError::Status {
        status: 404,
        method: "GET".into(),
        url: "https://stock.xueqiu.com/x".into(),
        body: None,
    };
    assert_eq!(err.to_string(), "HTTP 404 for GET https://stock.xueqiu.com/x");
}
