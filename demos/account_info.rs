use kavenegar::{AccountConfigUpdate, KavenegarClient, KavenegarConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = KavenegarClient::from_config(&KavenegarConfig::from_env())?;

    let info = client.account_info().await?;
    println!(
        "remaincredit: {:?}, expiredate: {:?}, type: {:?}",
        info.remain_credit,
        info.expire_date.map(|date| date.value()),
        info.account_type
    );

    // An empty update reads the current settings.
    let config = client.account_config(AccountConfigUpdate::default()).await?;
    println!("{config:?}");

    Ok(())
}
