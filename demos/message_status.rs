use std::io;

use kavenegar::{KavenegarClient, KavenegarConfig, MessageId, MessageIds};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Comma separated message ids returned by `send`.
    let raw_ids = std::env::var("K_MESSAGE_IDS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "K_MESSAGE_IDS environment variable is required",
        )
    })?;

    let ids = raw_ids
        .split(',')
        .map(|id| id.trim().parse::<u64>().map(MessageId::new))
        .collect::<Result<Vec<_>, _>>()?;

    let client = KavenegarClient::from_config(&KavenegarConfig::from_env())?;
    for entry in client.message_status(MessageIds::new(ids)?).await? {
        println!(
            "messageid: {}, status: {} ({:?}), final: {}",
            entry.message_id.value(),
            entry.status.as_i32(),
            entry.status_text,
            entry.status.is_final()
        );
    }

    Ok(())
}
