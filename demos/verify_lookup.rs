use std::io;

use kavenegar::{
    KavenegarClient, KavenegarConfig, Receptor, TemplateName, VerifyLookup, VerifyToken,
};

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let receptor = required("K_RECEPTOR")?;
    let token = required("K_TOKEN")?;
    let template = required("K_TEMPLATE")?;

    let client = KavenegarClient::from_config(&KavenegarConfig::from_env())?;
    let request = VerifyLookup::new(
        Receptor::new(receptor)?,
        VerifyToken::new(token)?,
        TemplateName::new(template)?,
    );

    for entry in client.send_verification_code(request).await? {
        println!(
            "messageid: {}, status: {}",
            entry.message_id.value(),
            entry.status.as_i32()
        );
    }

    Ok(())
}
