use xueqiu::XueqiuClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = XueqiuClient::builder().use_env(false).build()?;

    let resp = client.eastmoney().convertible_bond(20, 1).await?;
    if resp.success != Some(true) {
        eprintln!("Eastmoney returned: {}", resp.message.unwrap_or_default());
        return Ok(());
    }

    println!("{:<8} {:<12} {:>10} {:>10}", "Code", "Name", "Price", "Premium%");
    for row in resp.rows() {
        println!(
            "{:<8} {:<12} {:>10} {:>10}",
            row["SECURITY_CODE"].as_str().unwrap_or("-"),
            row["SECURITY_NAME_ABBR"].as_str().unwrap_or("-"),
            row["CURRENT_BOND_PRICE"],
            row["TRANSFER_PREMIUM_RATIO"]
        );
    }

    Ok(())
}
