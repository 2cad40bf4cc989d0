mod common;

use httpmock::Method::GET;
use serde_json::json;
use xueqiu::realtime::{KlineQuery, OrderBookLevel};

#[tokio::test]
async fn quotec_joins_symbols_and_coerces_numbers() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/realtime/quotec.json")
            .query_param("symbol", "SH600000,SZ000001,HK00700");
        then.status(200).body(common::ok(json!([
            { "symbol": "SH600000", "current": "10.52", "percent": -0.38, "timestamp": 1_700_000_000_000_i64 },
            { "symbol": "SZ000001", "current": null, "chg": "n/a" },
            { "symbol": "HK00700", "current": 320, "is_trade": true }
        ])));
    });

    let client = common::anon_client(&server);
    let quotes = client
        .realtime()
        .quotec(vec!["SH600000".to_string(), "SZ000001".into(), "HK00700".into()])
        .await
        .unwrap()
        .data
        .unwrap();

    mock.assert();
    assert_eq!(quotes[0].current, Some(10.52));
    assert_eq!(quotes[0].timestamp.unwrap().timestamp_millis(), 1_700_000_000_000);
    assert_eq!(quotes[1].current, None);
    assert_eq!(quotes[1].chg, None);
    assert_eq!(quotes[2].current, Some(320.0));
    assert_eq!(quotes[2].extra["is_trade"], true);
}

#[tokio::test]
async fn quote_detail_sends_extend_and_parses_sections() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/quote.json")
            .query_param("extend", "detail")
            .query_param("symbol", "SH600519");
        then.status(200).body(common::ok(json!({
            "market": { "status_id": 7, "region": "CN", "status": "已收盘" },
            "quote": { "symbol": "SH600519", "name": "贵州茅台", "current": 1700.5, "pe_ttm": "25.1" },
            "others": { "pankou_ratio": 12.3 },
            "tags": [ { "description": "融", "value": 6 }, "junk" ]
        })));
    });

    let client = common::client(&server);
    let detail = client
        .realtime()
        .quote_detail("SH600519")
        .await
        .unwrap()
        .data
        .unwrap();

    mock.assert();
    let quote = detail.quote.unwrap();
    assert_eq!(quote.name.as_deref(), Some("贵州茅台"));
    assert_eq!(quote.pe_ttm, Some(25.1));
    assert_eq!(detail.market.unwrap().status_id, Some(7));
    assert_eq!(detail.others.unwrap()["pankou_ratio"], 12.3);
    let tags = detail.tags.unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].value, Some(6));
}

#[tokio::test]
async fn pankou_gathers_flat_levels() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/realtime/pankou.json")
            .query_param("symbol", "SH600000");
        then.status(200).body(common::ok(json!({
            "symbol": "SH600000",
            "timestamp": 1_700_000_000_000_i64,
            "current": 10.5,
            "bp1": 10.49, "bc1": 1200,
            "bp2": "10.48", "bc2": "800",
            "bp3": 0, "bc3": 0,
            "bp4": 10.46, "bc4": null,
            "sp1": 10.5, "sc1": 300,
            "buypct": 60.1, "sellpct": 39.9, "diff": 400, "ratio": 20.2
        })));
    });

    let client = common::client(&server);
    let book = client
        .realtime()
        .pankou("SH600000")
        .await
        .unwrap()
        .data
        .unwrap();

    assert_eq!(book.symbol.as_deref(), Some("SH600000"));
    assert_eq!(book.current, Some(10.5));
    assert_eq!(
        book.bids,
        vec![
            OrderBookLevel { price: Some(10.49), count: Some(1200.0) },
            OrderBookLevel { price: Some(10.48), count: Some(800.0) },
            OrderBookLevel { price: Some(10.46), count: None },
        ]
    );
    assert_eq!(book.asks.len(), 1);
    assert_eq!(book.buypct, Some(60.1));
    assert!(book.extra.contains_key("bp1"));
}

#[tokio::test]
async fn pankou_keeps_explicit_levels() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v5/stock/realtime/pankou.json");
        then.status(200).body(common::ok(json!({
            "bids": [ { "price": 1.0, "count": 2 } ],
            "bp1": 9.9, "bc1": 9
        })));
    });

    let client = common::client(&server);
    let book = client
        .realtime()
        .pankou("SH600000")
        .await
        .unwrap()
        .data
        .unwrap();

    assert_eq!(book.bids, vec![OrderBookLevel { price: Some(1.0), count: Some(2.0) }]);
    assert!(book.asks.is_empty());
}

#[tokio::test]
async fn kline_sends_backward_count_and_zips_rows() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/chart/kline.json")
            .query_param("symbol", "SH600000")
            .query_param("begin", "1700000000000")
            .query_param("period", "week")
            .query_param("type", "before")
            .query_param("count", "-5")
            .query_param("indicator", "kline");
        then.status(200).body(common::ok(json!({
            "symbol": "SH600000",
            "column": ["timestamp", "volume", "open", "high", "low", "close"],
            "item": [
                [1_699_900_000_000_i64, 1000, 10.0, 10.5, 9.8, 10.2],
                [1_700_000_000_000_i64, 2000, 10.2, 10.9]
            ]
        })));
    });

    let client = common::client(&server);
    let query = KlineQuery::default()
        .period("week")
        .count(5)
        .begin_ms(1_700_000_000_000)
        .indicator("kline");
    let data = client
        .realtime()
        .kline("SH600000", query)
        .await
        .unwrap()
        .data
        .unwrap();

    mock.assert();
    let bars = data.bars();
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].close, Some(10.2));
    assert_eq!(bars[1].high, Some(10.9));
    assert_eq!(bars[1].low, None);
    assert_eq!(bars[1].close, None);
}

#[tokio::test]
async fn kline_count_sign_is_normalized() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/chart/kline.json")
            .query_param("count", "-10")
            .query_param("period", "day");
        then.status(200).body(common::ok(json!({ "column": [], "item": [] })));
    });

    let client = common::client(&server);
    let data = client
        .realtime()
        .kline("SH600000", KlineQuery::default().count(-10))
        .await
        .unwrap()
        .data
        .unwrap();

    mock.assert();
    assert!(data.bars().is_empty());
}

#[tokio::test]
async fn kline_requires_cookie() {
    let server = common::setup_server();
    let client = common::anon_client(&server);
    let err = client
        .realtime()
        .kline("SH600000", KlineQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, xueqiu::XqError::Auth(_)));
}
