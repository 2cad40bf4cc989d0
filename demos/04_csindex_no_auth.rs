use chrono::{Duration, Utc};
use xueqiu::XueqiuClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // CSIndex is public; the Xueqiu cookie is never sent there.
    let client = XueqiuClient::builder().use_env(false).build()?;
    let csi = client.csindex();

    let info = csi.index_basic_info("000300").await?;
    println!("--- CSI 300 ---");
    println!("{}", serde_json::to_string_pretty(&info.data)?);
    println!();

    let top10 = csi.index_weight_top10("000300").await?;
    println!("--- Top 10 weights ---");
    println!("{}", serde_json::to_string_pretty(&top10.data)?);
    println!();

    let end = Utc::now();
    let start = end - Duration::days(30);
    let perf = csi.index_perf("000300", start, end).await?;
    let rows = perf
        .data
        .as_ref()
        .and_then(|d| d.as_array())
        .map_or(0, Vec::len);
    println!("--- Performance: {rows} trading days in the last 30 days ---");

    Ok(())
}
