use std::io;

use kavenegar::{KavenegarClient, KavenegarConfig, MessageText, Receptor, SendMessage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let receptor = std::env::var("K_RECEPTOR").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "K_RECEPTOR environment variable is required",
        )
    })?;
    let message = std::env::var("K_MESSAGE")
        .unwrap_or_else(|_| "Hello from the kavenegar demo.".to_owned());

    let client = KavenegarClient::from_config(&KavenegarConfig::from_env())?;
    let request = SendMessage::to(Receptor::new(receptor)?, MessageText::new(message)?);

    for entry in client.send(request).await? {
        println!(
            "messageid: {}, status: {}, receptor: {:?}, cost: {:?}",
            entry.message_id.value(),
            entry.status.as_i32(),
            entry.receptor,
            entry.cost
        );
    }

    Ok(())
}
