use std::io;

use im_sms::{ContactFields, Credentials, ImClient, ListContactsParams, NewContact, TagName};

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
    let country_code = require_env("IM_COUNTRY_CODE")?;
    let phone_number = require_env("IM_PHONE_NUMBER")?;

    let client = ImClient::new(Credentials::new(api_key, api_secret, base_url)?);

    let fields = ContactFields {
        first_name: Some("Alice".to_owned()),
        last_name: Some("Smith".to_owned()),
        ..Default::default()
    };
    let contact = NewContact::new(country_code, phone_number, fields)?;

    let created = client.contacts().create(&contact).await?;
    println!("create: ok={} code={}", created.ok, created.code);

    let fetched = client.contacts().get(contact.msisdn()).await?;
    println!("get: ok={} data={}", fetched.ok, fetched.data);

    let update = ContactFields {
        custom_field_1: Some("VIP".to_owned()),
        ..Default::default()
    };
    let updated = client.contacts().update(contact.msisdn(), &update).await?;
    println!("update: ok={} code={}", updated.ok, updated.code);

    if let Ok(tag) = std::env::var("IM_TAG") {
        let tag = TagName::new(tag)?;
        let tagged = client.contacts().add_tag(contact.msisdn(), &tag).await?;
        println!("add_tag: ok={} code={}", tagged.ok, tagged.code);
    }

    let params = ListContactsParams {
        limit: Some(5),
        ..Default::default()
    };
    let listed = client.contacts().list(&params).await?;
    println!("list: ok={} data={}", listed.ok, listed.data);

    Ok(())
}
