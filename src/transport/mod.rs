//! Wire-format layer: request signing, query canonicalization and
//! per-resource request encoders.

mod contacts;
mod messages;
mod query;
mod shortlinks;
mod sign;
mod tags;

pub use contacts::{contact_fields_body, list_contacts_query, new_contact_body};
pub use messages::{
    delivery_reports_query, list_messages_query, send_message_body, send_to_tags_body,
};
pub use query::{encode_component, encode_query};
pub use shortlinks::{
    list_shortlinks_query, new_shortlink_body, shortlink_id_query, shortlink_status_body,
};
pub use sign::{AUTH_SCHEME, SignedHeaders, canonical_string, http_date, sign, signed_headers};
pub use tags::{
    list_tags_query, new_tag_body, tag_contacts_query, tag_members_body, tag_name_query,
    tag_update_body,
};
