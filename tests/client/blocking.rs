use crate::common;
use httpmock::Method::GET;
use xueqiu::{Method, RequestOptions, XqError};

#[test]
fn blocking_client_serves_the_same_endpoints() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/realtime/quotec.json")
            .query_param("symbol", "SH600000,SZ000001")
            .header("cookie", common::COOKIE);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::ok(serde_json::json!([
                { "symbol": "SH600000", "current": 10.5 },
                { "symbol": "SZ000001", "current": "11.2" }
            ])));
    });

    let client = common::blocking_client(&server);
    let quotes = client
        .realtime()
        .quotec(["SH600000", "SZ000001"])
        .unwrap()
        .data
        .unwrap();

    mock.assert();
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[1].current, Some(11.2));
}

#[test]
fn blocking_client_retries_server_errors() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v5/stock/realtime/quotec.json");
        then.status(502);
    });

    let client = common::blocking_client(&server);
    let err = client.realtime().quotec(["SH600000"]).unwrap_err();

    mock.assert_calls(3);
    assert_eq!(err.status(), Some(502));
}

#[test]
fn blocking_client_checks_auth_before_sending() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v5/stock/f10/cn/skholder.json");
        then.status(200);
    });

    let client = common::builder(&server).build_blocking().unwrap();
    let err = client.f10().skholder("SH600000").unwrap_err();

    assert!(matches!(err, XqError::Auth(_)));
    mock.assert_calls(0);
}

#[test]
fn blocking_escape_hatch() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v5/stock/hot_stock/list.json");
        then.status(200)
            .body(common::ok(serde_json::json!({ "items": [{ "code": "SH600000" }] })));
    });

    let client = common::blocking_client(&server);
    let value = client
        .request_json(
            Method::GET,
            "/v5/stock/hot_stock/list.json",
            &[("size", "8")],
            RequestOptions::default(),
        )
        .unwrap();

    assert_eq!(value["data"]["items"][0]["code"], "SH600000");
}
