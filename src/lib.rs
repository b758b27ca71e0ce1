//! Typed Rust client for the IM bulk-messaging HTTP API.
//!
//! Every request is signed with HMAC-SHA1 over the API key, the HTTP date,
//! the canonical query string and the JSON body, and carries the signature
//! in its `Authorization` header. The crate is split into a domain layer of
//! strong types, a transport layer for the wire-format rules, and a client
//! layer that turns every HTTP response into a uniform [`ApiResponse`]
//! envelope (non-2xx responses are envelopes too, not errors).
//!
//! ```rust,no_run
//! use im_sms::{Credentials, ImClient, MessageText, Msisdn, SendMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), im_sms::ImError> {
//!     let credentials = Credentials::new("key", "secret", "https://api.example.com/v1")?;
//!     let client = ImClient::new(credentials);
//!
//!     let message = SendMessage::new(
//!         Msisdn::new("50212345678")?,
//!         MessageText::new("hello from Rust")?,
//!     );
//!     let response = client.messages().send_to_contact(&message).await?;
//!     println!("ok = {}, code = {}", response.ok, response.code);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BulkSendReport, ConfigurationError, Contacts, Credentials, ImClient, ImClientBuilder, ImError,
    Messages, RecipientOutcome, Shortlinks, Tags,
};
pub use domain::{
    ApiDate, ApiResponse, ContactFields, ContactStatus, DeliveryReportsParams, ListContactsParams,
    ListMessagesParams, ListShortlinksParams, ListTagsParams, MessageDirection, MessageText,
    Msisdn, NewContact, NewShortlink, NewTag, SendMessage, SendToContacts, SendToTags,
    ShortlinkAlias, ShortlinkId, ShortlinkName, ShortlinkStatus, TagContactsParams, TagName,
    TagUpdate, ValidationError,
};
