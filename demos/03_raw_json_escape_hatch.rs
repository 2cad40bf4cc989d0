use serde::Deserialize;
use xueqiu::{Method, RequestOptions, XueqiuClient, XueqiuResponse};

/// Only the fields this demo cares about.
#[derive(Debug, Deserialize)]
struct HotStocks {
    #[serde(default)]
    items: Vec<HotStock>,
}

#[derive(Debug, Deserialize)]
struct HotStock {
    code: String,
    name: Option<String>,
    percent: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = XueqiuClient::from_env()?;
    let options = RequestOptions {
        require_auth: true,
        check_api_error: true,
    };

    // Any endpoint the crate does not wrap can still be reached as raw JSON...
    let raw = client
        .request_json(
            Method::GET,
            "/v5/stock/hot_stock/list.json",
            &[("size", "8"), ("type", "10")],
            options,
        )
        .await?;
    println!("Raw keys: {:?}", raw.as_object().map(|m| m.keys().collect::<Vec<_>>()));

    // ...or decoded into your own types.
    let hot: XueqiuResponse<HotStocks> = client
        .request_model(
            Method::GET,
            "/v5/stock/hot_stock/list.json",
            &[("size", "8"), ("type", "10")],
            options,
        )
        .await?;
    for s in hot.data.map(|d| d.items).unwrap_or_default() {
        println!(
            "  {:<10} {:<12} {:>+6.2}%",
            s.code,
            s.name.unwrap_or_default(),
            s.percent.unwrap_or_default()
        );
    }

    Ok(())
}
