use xueqiu::blocking::XueqiuClient;
use xueqiu::realtime::KlineQuery;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Reads XUEQIU_TOKEN / XUEQIU_COOKIE and friends from the environment.
    let client = XueqiuClient::from_env()?;

    println!("--- Quotes (no cookie needed) ---");
    let quotes = client
        .realtime()
        .quotec(["SH600000", "SZ000001", "HK00700"])?;
    for q in quotes.data.unwrap_or_default() {
        println!(
            "  {:<10} {:>10.2} {:>+7.2}%",
            q.symbol,
            q.current.unwrap_or_default(),
            q.percent.unwrap_or_default()
        );
    }
    println!();

    if !client.has_auth() {
        println!("Set XUEQIU_TOKEN to also fetch K-lines and the order book.");
        return Ok(());
    }

    println!("--- Last 5 daily bars for SH600519 ---");
    let kline = client
        .realtime()
        .kline("SH600519", KlineQuery::default().count(5))?;
    for bar in kline.data.map(|d| d.bars()).unwrap_or_default() {
        println!(
            "  {} close={:.2} volume={:.0}",
            bar.timestamp.map(|t| t.date_naive().to_string()).unwrap_or_default(),
            bar.close.unwrap_or_default(),
            bar.volume.unwrap_or_default()
        );
    }
    println!();

    println!("--- Order book for SH600519 ---");
    if let Some(book) = client.realtime().pankou("SH600519")?.data {
        for (bid, ask) in book.bids.iter().zip(&book.asks).take(5) {
            println!(
                "  bid {:>9.2} x {:<8.0} | ask {:>9.2} x {:<8.0}",
                bid.price.unwrap_or_default(),
                bid.count.unwrap_or_default(),
                ask.price.unwrap_or_default(),
                ask.count.unwrap_or_default()
            );
        }
    }

    Ok(())
}
