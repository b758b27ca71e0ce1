use std::io;

use im_sms::{
    Credentials, ImClient, ListShortlinksParams, NewShortlink, ShortlinkAlias, ShortlinkName,
};

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
    let long_url = require_env("IM_LONG_URL")?;

    let client = ImClient::new(Credentials::new(api_key, api_secret, base_url)?);

    let mut link = NewShortlink::new(long_url)?.with_name(ShortlinkName::new("Demo link")?);
    if let Ok(alias) = std::env::var("IM_ALIAS") {
        link = link.with_alias(ShortlinkAlias::new(alias)?);
        let created = client.shortlinks().create_with_alias(&link).await?;
        println!("create_with_alias: ok={} data={}", created.ok, created.data);
    } else {
        let created = client.shortlinks().create(&link).await?;
        println!("create: ok={} data={}", created.ok, created.data);
    }

    let params = ListShortlinksParams {
        limit: Some(10),
        ..Default::default()
    };
    let listed = client.shortlinks().list(&params).await?;
    println!("list: ok={} data={}", listed.ok, listed.data);

    Ok(())
}
