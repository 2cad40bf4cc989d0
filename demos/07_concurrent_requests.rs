use futures::future::join_all;
use std::time::Instant;
use xueqiu::XueqiuClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = XueqiuClient::from_env()?;
    let symbols = ["SH600000", "SH600036", "SH600519", "SZ000001", "SZ000858", "SZ300750"];

    // One request per symbol, all in flight at once. The client is cheap to share by reference.
    let started = Instant::now();
    let results = join_all(symbols.iter().map(|s| client.realtime().quotec([*s]))).await;
    println!("Fetched {} quotes in {:?}", results.len(), started.elapsed());

    for (symbol, result) in symbols.iter().zip(results) {
        match result {
            Ok(resp) => {
                let quote = resp.data.and_then(|v| v.into_iter().next());
                println!(
                    "  {:<10} {:>10.2}",
                    symbol,
                    quote.and_then(|q| q.current).unwrap_or_default()
                );
            }
            Err(e) => println!("  {symbol:<10} failed: {e}"),
        }
    }

    // Different endpoint groups can run together too.
    if client.has_auth() {
        let (detail, flow) = futures::join!(
            client.realtime().quote_detail("SH600519"),
            client.capital().flow("SH600519"),
        );
        println!();
        println!("quote_detail ok: {}", detail.is_ok());
        println!("capital flow points: {}", flow?.data.map_or(0, |d| d.items.len()));
    }

    Ok(())
}
