mod common;

use httpmock::Method::GET;
use serde_json::json;
use xueqiu::finance::{FinanceQuery, MetricValue, StatementQuery};

fn statement_payload() -> serde_json::Value {
    json!({
        "quote_name": "浦发银行",
        "currency": "CNY",
        "org_type": "2",
        "list": [
            {
                "report_date": 1_703_952_000_000_i64,
                "report_name": "2023年报",
                "total_revenue": [1.7e11, -0.08],
                "net_profit": ["3.67e10", null],
                "avg_roe": [5.3, "bad"],
                "ctime": 1_704_000_000_000_i64
            },
            "junk"
        ]
    })
}

#[tokio::test]
async fn classic_statement_with_annual_filter() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/finance/cn/income.json")
            .query_param("symbol", "SH600000")
            .query_param("count", "5")
            .query_param("type", "Q4")
            .header("cookie", common::COOKIE);
        then.status(200).body(common::ok(statement_payload()));
    });

    let client = common::client(&server);
    let data = client
        .finance()
        .income("SH600000", StatementQuery::annual().count(5))
        .await
        .unwrap()
        .data
        .unwrap();

    mock.assert();
    assert_eq!(data.quote_name.as_deref(), Some("浦发银行"));
    assert_eq!(data.org_type, Some(2));
    assert_eq!(data.periods.len(), 1);

    let period = &data.periods[0];
    assert_eq!(period.report_name.as_deref(), Some("2023年报"));
    assert_eq!(
        period.metric("total_revenue"),
        Some(&MetricValue { value: Some(1.7e11), yoy: Some(-0.08) })
    );
    assert_eq!(
        period.metric("net_profit"),
        Some(&MetricValue { value: Some(3.67e10), yoy: None })
    );
    assert!(period.metric("avg_roe").is_none());
    assert!(period.extra.contains_key("avg_roe"));
    assert!(period.extra.contains_key("ctime"));
}

#[tokio::test]
async fn quarterly_statement_omits_type() {
    let server = common::setup_server();
    let with_type = server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/finance/cn/balance.json")
            .query_param_exists("type");
        then.status(500);
    });
    let plain = server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/finance/cn/balance.json")
            .query_param("count", "10");
        then.status(200).body(common::ok(json!({ "list": [] })));
    });

    let client = common::client(&server);
    let data = client
        .finance()
        .balance("SH600000", StatementQuery::default())
        .await
        .unwrap()
        .data
        .unwrap();

    plain.assert();
    with_type.assert_calls(0);
    assert!(data.periods.is_empty());
}

#[tokio::test]
async fn v2_endpoints_lowercase_the_region() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v5/stock/finance/hk/indicator.json")
            .query_param("symbol", "00700")
            .query_param("type", "Q4")
            .query_param("is_detail", "false")
            .query_param("count", "3");
        then.status(200).body(common::ok(statement_payload()));
    });

    let client = common::client(&server);
    let query = FinanceQuery::default()
        .region(" HK ")
        .kind("Q4")
        .is_detail(false)
        .count(3);
    let data = client
        .finance()
        .indicator_v2("00700", &query)
        .await
        .unwrap()
        .data
        .unwrap();

    mock.assert();
    assert_eq!(data.periods.len(), 1);
}

#[tokio::test]
async fn v2_defaults_hit_cn_with_full_detail() {
    let server = common::setup_server();
    let mocks: Vec<_> = ["cash_flow", "balance", "income"]
        .into_iter()
        .map(|name| {
            server.mock(|when, then| {
                when.method(GET)
                    .path(format!("/v5/stock/finance/cn/{name}.json"))
                    .query_param("symbol", "SH600519")
                    .query_param("type", "all")
                    .query_param("is_detail", "true")
                    .query_param("count", "10");
                then.status(200).body(common::ok(statement_payload()));
            })
        })
        .collect();

    let client = common::client(&server);
    let query = FinanceQuery::default();
    let finance = client.finance();
    let cash_flow = finance.cash_flow_v2("SH600519", &query).await.unwrap();
    let balance = finance.balance_v2("SH600519", &query).await.unwrap();
    let income = finance.income_v2("SH600519", &query).await.unwrap();

    for mock in &mocks {
        mock.assert();
    }
    for statements in [cash_flow, balance, income] {
        assert_eq!(statements.data.unwrap().periods.len(), 1);
    }
}

#[tokio::test]
async fn business_breakdown() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v5/stock/finance/cn/business.json");
        then.status(200).body(common::ok(json!({
            "quote_name": "贵州茅台",
            "list": [{
                "report_date": "2023-12-31",
                "report_name": "2023年报",
                "class_list": [{
                    "class_standard": 1,
                    "business_list": [
                        { "project_announced_name": "茅台酒", "prime_operating_income": "1.26e11", "income_ratio": 0.85 },
                        { "project_announced_name": "系列酒", "gross_profit_rate": null }
                    ]
                }]
            }]
        })));
    });

    let client = common::client(&server);
    let data = client
        .finance()
        .business("SH600519", StatementQuery::default())
        .await
        .unwrap()
        .data
        .unwrap();

    let period = &data.periods[0];
    assert_eq!(period.report_date.unwrap().format("%Y-%m-%d").to_string(), "2023-12-31");
    let items = &period.class_list[0].business_list;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].prime_operating_income, Some(1.26e11));
    assert_eq!(items[1].gross_profit_rate, None);
}

#[test]
fn finance_requires_cookie_in_blocking_mode_too() {
    let server = common::setup_server();
    let client = common::builder(&server).build_blocking().unwrap();
    let err = client
        .finance()
        .cash_flow("SH600000", StatementQuery::default())
        .unwrap_err();
    assert!(matches!(err, xueqiu::XqError::Auth(_)));
}
