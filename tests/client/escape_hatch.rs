use crate::common;
use httpmock::Method::{GET, POST};
use serde::Deserialize;
use xueqiu::{ApiRequest, Host, Method, RequestOptions, Target, XueqiuResponse};

#[tokio::test]
async fn request_json_resolves_paths_on_the_stock_host() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/screener/quote/list.json")
            .query_param("page", "1")
            .query_param("size", "30")
            .header("cookie", common::COOKIE);
        then.status(200)
            .body(common::ok(serde_json::json!({ "count": 1, "list": [{ "symbol": "SH600000" }] })));
    });

    let client = common::client(&server);
    let value = client
        .request_json(
            Method::GET,
            "/v5/stock/screener/quote/list.json",
            &[("page", "1"), ("size", "30")],
            RequestOptions::default(),
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(value["data"]["list"][0]["symbol"], "SH600000");
}

#[tokio::test]
async fn request_json_accepts_absolute_urls() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/custom/endpoint");
        then.status(200).body(r#"[1,2,3]"#);
    });

    let client = common::client(&server);
    let target = format!("{}/custom/endpoint", server.base_url());
    let value = client
        .request_json(Method::POST, &target, &[], RequestOptions::default())
        .await
        .unwrap();

    mock.assert();
    assert_eq!(value, serde_json::json!([1, 2, 3]));
}

#[derive(Debug, Deserialize)]
struct Screener {
    count: i64,
}

#[tokio::test]
async fn request_model_decodes_into_caller_types() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v5/stock/screener/quote/list.json");
        then.status(200)
            .body(common::ok(serde_json::json!({ "count": 7 })));
    });

    let client = common::client(&server);
    let resp: XueqiuResponse<Screener> = client
        .request_model(
            Method::GET,
            "/v5/stock/screener/quote/list.json",
            &[],
            RequestOptions {
                require_auth: true,
                check_api_error: true,
            },
        )
        .await
        .unwrap();

    assert!(resp.is_success());
    assert_eq!(resp.data.unwrap().count, 7);
}

#[tokio::test]
async fn prepared_requests_run_through_execute_json() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/cubes/discover/rank/cube/list.json")
            .query_param("category", "14");
        then.status(200).body(common::ok(serde_json::json!({ "list": [] })));
    });

    let client = common::client(&server);
    let req = ApiRequest::get(Host::Main, "/cubes/discover/rank/cube/list.json")
        .param("category", 14)
        .require_auth();
    assert_eq!(
        req.target(),
        &Target::Path(Host::Main, "/cubes/discover/rank/cube/list.json".into())
    );
    let value = client.execute_json(req).await.unwrap();

    mock.assert();
    assert!(value["data"]["list"].as_array().unwrap().is_empty());
}

#[test]
fn target_parsing() {
    assert_eq!(
        Target::parse("https://example.com/a"),
        Target::Absolute("https://example.com/a".into())
    );
    assert_eq!(
        Target::parse("/v5/stock/quote.json"),
        Target::Path(Host::Stock, "/v5/stock/quote.json".into())
    );
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = common::setup_server();
    let stock = server.mock(|when, then| {
        when.method(GET)
            .path("/proxy/v5/stock/realtime/quotec.json")
            .query_param("symbol", "SH600000")
            .header("cookie", common::COOKIE);
        then.status(200).body(common::ok(serde_json::json!([{ "symbol": "SH600000" }])));
    });
    let danjuan = server.mock(|when, then| {
        when.method(GET).path("/dj/djapi/fund/detail/110011");
        then.status(200).body(r#"{"result_code":0,"data":{}}"#);
    });

    let client = common::builder(&server)
        .base_url(url::Url::parse(&server.url("/proxy/")).unwrap())
        .danjuan_base_url(url::Url::parse(&server.url("/dj")).unwrap())
        .cookie(common::COOKIE)
        .build()
        .unwrap();

    let quotes = client.realtime().quotec(["SH600000"]).await.unwrap();
    client.danjuan().fund_detail("110011").await.unwrap();

    stock.assert();
    danjuan.assert();
    assert_eq!(quotes.data.unwrap()[0].symbol, "SH600000");
}
