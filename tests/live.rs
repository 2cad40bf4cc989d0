//! Smoke tests against the real services.
//!
//! Opt-in: `XQ_LIVE=1 cargo test --test live -- --ignored`. Endpoints that need a
//! cookie run only when `XUEQIU_TOKEN` or `XUEQIU_COOKIE` is set. Add
//! `--features test-mode` and `XQ_RECORD=1` to save every response body under
//! `tests/fixtures/<host>/`.

use xueqiu::XueqiuClient;

fn live() -> bool {
    std::env::var("XQ_LIVE").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_endpoints() {
    if !live() {
        return;
    }
    let client = XueqiuClient::from_env().unwrap();

    let quotes = client
        .realtime()
        .quotec(["SH600000", "SZ000001"])
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(quotes.len(), 2);
    assert!(quotes.iter().all(|q| !q.symbol.is_empty()));

    let perf = client.csindex().index_basic_info("000300").await.unwrap();
    assert!(perf.data.is_some());

    let bonds = client.eastmoney().convertible_bond(10, 1).await.unwrap();
    assert!(!bonds.rows().is_empty());
}

#[tokio::test]
#[ignore]
async fn live_authenticated_endpoints() {
    if !live() {
        return;
    }
    let client = XueqiuClient::from_env().unwrap();
    if !client.has_auth() {
        return;
    }

    let detail = client
        .realtime()
        .quote_detail("SH600519")
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(detail.quote.unwrap().symbol.as_deref(), Some("SH600519"));

    let holders = client
        .f10()
        .top_holders("SH600519", 1)
        .await
        .unwrap()
        .data
        .unwrap();
    assert!(!holders.items.is_empty());
}

#[test]
#[ignore]
fn live_blocking_client() {
    if !live() {
        return;
    }
    let client = xueqiu::blocking::XueqiuClient::from_env().unwrap();
    let quotes = client.realtime().quotec(["SH000001"]).unwrap();
    assert!(quotes.is_success());
}
