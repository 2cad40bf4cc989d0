use std::time::Duration;
use xueqiu::XueqiuClient;
use xueqiu::finance::StatementQuery;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. A client with a short timeout, picking the cookie up from the environment.
    let client = XueqiuClient::builder()
        .timeout(Duration::from_secs(5))
        .max_retries(3)
        .debug(true)
        .build()?;

    if !client.has_auth() {
        eprintln!("This demo needs XUEQIU_TOKEN or XUEQIU_COOKIE.");
        return Ok(());
    }

    // 2. Quote detail.
    let detail = client.realtime().quote_detail("SH600519").await?;
    if let Some(q) = detail.data.and_then(|d| d.quote) {
        println!("--- {} ({}) ---", q.name.unwrap_or_default(), q.symbol.unwrap_or_default());
        println!("Price:   {:.2}", q.current.unwrap_or_default());
        println!("PE(TTM): {:.2}", q.pe_ttm.unwrap_or_default());
        println!("PB:      {:.2}", q.pb.unwrap_or_default());
        println!();
    }

    // 3. Annual income statements.
    let income = client
        .finance()
        .income("SH600519", StatementQuery::annual().count(3))
        .await?;
    println!("--- Annual revenue ---");
    for period in income.data.map(|d| d.periods).unwrap_or_default() {
        let revenue = period.metric("total_revenue").and_then(|m| m.value);
        println!(
            "  {:<10} {:>20.0}",
            period.report_name.unwrap_or_default(),
            revenue.unwrap_or_default()
        );
    }
    println!();

    // 4. Top ten float holders.
    let holders = client.f10().top_holders("SH600519", 1).await?;
    println!("--- Top holders ---");
    for h in holders.data.map(|d| d.items).unwrap_or_default() {
        println!(
            "  {:<30} {:>6.2}%",
            h.holder_name().unwrap_or_default(),
            h.held_ratio.unwrap_or_default()
        );
    }

    Ok(())
}
