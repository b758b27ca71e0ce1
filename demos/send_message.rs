use std::io;

use im_sms::{Credentials, ImClient, MessageText, Msisdn, SendMessage};

fn require_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = require_env("IM_API_KEY")?;
    let api_secret = require_env("IM_API_SECRET")?;
    let base_url = require_env("IM_BASE_URL")?;
    let phone = require_env("IM_PHONE")?;
    let text = std::env::var("IM_MESSAGE")
        .unwrap_or_else(|_| "Hello from the im-sms example.".to_owned());

    let client = ImClient::new(Credentials::new(api_key, api_secret, base_url)?);

    // Accepts international input such as "+502 1234 5678".
    let msisdn = Msisdn::parse(None, &phone)?;
    let message = SendMessage::new(msisdn, MessageText::new(text)?);

    let response = client.messages().send_to_contact(&message).await?;
    println!(
        "send: ok={} code={} status={}",
        response.ok, response.code, response.status
    );
    println!("data: {}", response.data);

    Ok(())
}
