use std::io;

use kavenegar::{
    BulkSend, BulkSendOptions, KavenegarClient, KavenegarConfig, MessageText, OneOrMany, Receptor,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Comma separated, e.g. "09120000001,09120000002".
    let receptors = std::env::var("K_RECEPTORS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "K_RECEPTORS environment variable is required",
        )
    })?;
    let message = std::env::var("K_MESSAGE")
        .unwrap_or_else(|_| "Hello from the kavenegar demo.".to_owned());

    let receptors = receptors
        .split(',')
        .map(Receptor::new)
        .collect::<Result<Vec<_>, _>>()?;

    let client = KavenegarClient::from_config(&KavenegarConfig::from_env())?;
    let request = BulkSend::new(
        receptors,
        OneOrMany::One(MessageText::new(message)?),
        BulkSendOptions::default(),
    )?;

    for entry in client.bulk_send(request).await? {
        println!(
            "messageid: {}, receptor: {:?}, status: {}",
            entry.message_id.value(),
            entry.receptor,
            entry.status.as_i32()
        );
    }

    Ok(())
}
