use crate::common;
use httpmock::Method::GET;
use httpmock::MockServer;
use xueqiu::XqError;

const QUOTEC: &str = "/v5/stock/realtime/quotec.json";
const PANKOU: &str = "/v5/stock/realtime/pankou.json";

#[tokio::test]
async fn cookie_is_sent_to_the_stock_host() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(PANKOU)
            .header("cookie", common::COOKIE)
            .header("accept", "application/json");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::ok(serde_json::json!({ "symbol": "SH600000" })));
    });

    let client = common::client(&server);
    let resp = client.realtime().pankou("SH600000").await.unwrap();

    mock.assert();
    assert_eq!(resp.data.unwrap().symbol.as_deref(), Some("SH600000"));
}

#[tokio::test]
async fn auth_endpoint_without_cookie_fails_before_sending() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(PANKOU);
        then.status(200).body(common::ok(serde_json::json!({})));
    });

    let client = common::anon_client(&server);
    assert!(!client.has_auth());
    let err = client.realtime().pankou("SH600000").await.unwrap_err();

    assert!(matches!(err, XqError::Auth(_)), "got {err:?}");
    mock.assert_calls(0);
}

#[tokio::test]
async fn public_endpoint_works_without_cookie() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(QUOTEC).header_missing("cookie");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::ok(serde_json::json!([])));
    });

    let client = common::anon_client(&server);
    let resp = client.realtime().quotec(["SH600000"]).await.unwrap();

    mock.assert();
    assert!(resp.data.unwrap().is_empty());
}

#[tokio::test]
async fn cookie_map_is_rendered_sorted_by_key() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(PANKOU)
            .header("cookie", "u=42; xq_a_token=abc");
        then.status(200).body(common::ok(serde_json::json!({})));
    });

    let client = common::builder(&server)
        .cookies([("xq_a_token", "abc"), ("u", "42")])
        .build()
        .unwrap();
    assert!(client.has_auth());
    assert_eq!(client.cookie(), None);
    client.realtime().pankou("SH600000").await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn cookie_string_wins_over_cookie_map() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(PANKOU).header("cookie", common::COOKIE);
        then.status(200).body(common::ok(serde_json::json!({})));
    });

    let client = common::builder(&server)
        .cookie(format!("  {}  ", common::COOKIE))
        .cookies([("u", "other")])
        .build()
        .unwrap();
    assert_eq!(client.cookie(), Some(common::COOKIE));
    client.realtime().pankou("SH600000").await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn blank_cookie_counts_as_missing() {
    let server = common::setup_server();
    let client = common::builder(&server).cookie("   ").build().unwrap();

    assert!(!client.has_auth());
    assert_eq!(client.cookie(), None);
}

#[tokio::test]
async fn third_party_hosts_never_receive_the_cookie() {
    let xueqiu = common::setup_server();
    let csindex = MockServer::start();

    let leak = csindex.mock(|when, then| {
        when.method(GET)
            .path("/csindex-home/index/weight/top10/000300")
            .header_exists("cookie");
        then.status(500);
    });
    let clean = csindex.mock(|when, then| {
        when.method(GET)
            .path("/csindex-home/index/weight/top10/000300")
            .header_missing("cookie");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"code":"200","msg":"Success","data":[{"weight":"10.1"}],"success":true}"#);
    });

    let client = common::builder(&xueqiu)
        .csindex_base_url(common::url(&csindex))
        .cookie(common::COOKIE)
        .build()
        .unwrap();
    let resp = client.csindex().index_weight_top10("000300").await.unwrap();

    clean.assert();
    leak.assert_calls(0);
    assert_eq!(resp.success(), Some(true));
}

#[test]
fn xueqiu_host_matching() {
    assert!(xueqiu::core::client::is_xueqiu_host("stock.xueqiu.com"));
    assert!(xueqiu::core::client::is_xueqiu_host("XUEQIU.COM"));
    assert!(!xueqiu::core::client::is_xueqiu_host("notxueqiu.com"));
    assert!(!xueqiu::core::client::is_xueqiu_host("www.csindex.com.cn"));
}
