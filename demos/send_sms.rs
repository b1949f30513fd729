use std::io;

use cellsynt::{ClientConfig, Message, Recipient, TextMessage};
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cellsynt=debug")),
        )
        .init();

    let config = ClientConfig {
        username: required_env("CELLSYNT_USERNAME")?,
        password: required_env("CELLSYNT_PASSWORD")?,
        originator_type: Some(cellsynt::OriginatorType::Alpha),
        originator: std::env::var("CELLSYNT_ORIGINATOR").ok(),
        charset: Some(cellsynt::Charset::Utf8),
        allow_concat: true,
        default_country_code: std::env::var("CELLSYNT_COUNTRY_CODE").ok(),
        endpoint: std::env::var("CELLSYNT_ENDPOINT").ok(),
        timeout_secs: Some(30),
        user_agent: None,
    };
    let destinations = required_env("CELLSYNT_DESTINATIONS")?;
    let text = std::env::var("CELLSYNT_MESSAGE")
        .unwrap_or_else(|_| "Hello from the cellsynt example.".to_owned());

    let client = config.into_client()?;
    let recipient = Recipient::new(destinations.split(','));
    let message = Message::Text(TextMessage::new(recipient, text));

    let response = client.send_message(message).await?;
    for id in &response.tracking_ids {
        println!("tracking id: {id}");
    }

    Ok(())
}
