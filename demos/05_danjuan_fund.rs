use xueqiu::blocking::XueqiuClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = XueqiuClient::builder().use_env(false).build_blocking()?;
    let dj = client.danjuan();
    let code = "110011";

    let info = dj.fund_info(code)?;
    if let Some(data) = &info.data {
        println!("--- {} ---", data["fd_name"].as_str().unwrap_or(code));
        println!("Type:    {}", data["type_desc"].as_str().unwrap_or("-"));
        println!("Manager: {}", data["manager_name"].as_str().unwrap_or("-"));
    }
    println!();

    let navs = dj.fund_nav_history(code, 1, 5)?;
    println!("--- Latest NAV ---");
    let items = navs
        .data
        .as_ref()
        .and_then(|d| d["items"].as_array())
        .cloned()
        .unwrap_or_default();
    for row in items {
        println!(
            "  {} nav={} change={}%",
            row["date"].as_str().unwrap_or("-"),
            row["nav"].as_str().unwrap_or("-"),
            row["percentage"].as_str().unwrap_or("-")
        );
    }
    println!();

    let managers = dj.fund_manager(code, 1)?;
    println!("--- Current managers ---");
    println!("{}", serde_json::to_string_pretty(&managers.data)?);

    Ok(())
}
