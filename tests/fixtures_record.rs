//! Fixture recording under `test-mode`. Run with `--features test-mode`.
#![cfg(feature = "test-mode")]

mod common;

use httpmock::Method::GET;
use url::Url;
use xueqiu::fixtures;

#[test]
fn fixture_names_follow_the_url_path() {
    let name = |raw: &str| fixtures::name(&Url::parse(raw).unwrap());

    assert_eq!(name("https://stock.xueqiu.com/v5/stock/quote.json"), "v5_stock_quote");
    assert_eq!(
        name("https://stock.xueqiu.com/v5/stock/realtime/quotec.json?symbol=SH600000"),
        "v5_stock_realtime_quotec"
    );
    assert_eq!(name("https://danjuanapp.com/djapi/fund/detail/110011"), "djapi_fund_detail_110011");
    assert_eq!(name("https://xueqiu.com/"), "root");
    assert_eq!(name("https://xueqiu.com"), "root");
}

#[tokio::test]
async fn recorded_bodies_land_under_the_fixture_dir() {
    let dir = std::env::temp_dir().join(format!("xueqiu-fixtures-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    unsafe { std::env::set_var("XQ_FIXDIR", &dir) };

    let saved = fixtures::save(
        &Url::parse("https://stock.xueqiu.com/v5/stock/quote.json").unwrap(),
        r#"{"data":{}}"#,
    )
    .unwrap();
    assert_eq!(saved, dir.join("stock.xueqiu.com").join("v5_stock_quote.json"));
    assert_eq!(std::fs::read_to_string(&saved).unwrap(), r#"{"data":{}}"#);

    let server = common::setup_server();
    let body = common::ok(serde_json::json!([{ "symbol": "SH600000", "current": 8.1 }]));
    server.mock(|when, then| {
        when.method(GET).path("/v5/stock/realtime/quotec.json");
        then.status(200).body(body.clone());
    });
    let client = common::client(&server);
    let host = common::url(&server).host_str().unwrap().to_string();

    // Without XQ_RECORD nothing is written.
    unsafe { std::env::remove_var("XQ_RECORD") };
    client.realtime().quotec(["SH600000"]).await.unwrap();
    let recorded = dir.join(&host).join("v5_stock_realtime_quotec.json");
    assert!(!recorded.exists());

    unsafe { std::env::set_var("XQ_RECORD", "1") };
    client.realtime().quotec(["SH600000"]).await.unwrap();
    unsafe { std::env::remove_var("XQ_RECORD") };
    assert_eq!(std::fs::read_to_string(&recorded).unwrap(), body);

    unsafe { std::env::remove_var("XQ_FIXDIR") };
    let _ = std::fs::remove_dir_all(&dir);
}
