//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    ContactFields, DeliveryReportsParams, LONG_URL_FIELD, ListContactsParams, ListMessagesParams,
    ListShortlinksParams, ListTagsParams, MSISDNS_FIELD, NAME_FIELD, NewContact, NewShortlink,
    NewTag, SendMessage, SendToContacts, SendToTags, TAGS_FIELD, TagContactsParams, TagUpdate,
};
pub use response::ApiResponse;
pub use validation::ValidationError;
pub use value::{
    ApiDate, ContactStatus, MessageDirection, MessageText, Msisdn, ShortlinkAlias, ShortlinkId,
    ShortlinkName, ShortlinkStatus, TagName,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_contact_joins_parts_into_msisdn() {
        let contact = NewContact::new("502", "12345678", ContactFields::default()).unwrap();
        assert_eq!(contact.msisdn().as_str(), "50212345678");
        assert_eq!(contact.country_code(), "502");
        assert_eq!(contact.phone_number(), "12345678");
    }

    #[test]
    fn new_contact_rejects_bad_parts() {
        let err = NewContact::new("", "12345678", ContactFields::default()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Empty {
                field: "country_code"
            }
        ));

        let err = NewContact::new("502", "123 456", ContactFields::default()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidMsisdn { .. }));
    }

    #[test]
    fn send_to_contacts_requires_recipients() {
        let msg = MessageText::new("hi").unwrap();
        let err = SendToContacts::new(Vec::new(), msg).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Empty {
                field: MSISDNS_FIELD
            }
        ));
    }

    #[test]
    fn send_to_tags_requires_tags() {
        let msg = MessageText::new("hi").unwrap();
        let err = SendToTags::new(Vec::new(), msg).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: TAGS_FIELD }));
    }

    #[test]
    fn new_tag_requires_name() {
        let err = NewTag::new("   ").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: NAME_FIELD }));

        let tag = NewTag::new(" VIP Customers ")
            .unwrap()
            .with_short_name(TagName::new("vip").unwrap())
            .with_description("high value contacts");
        assert_eq!(tag.name(), "VIP Customers");
        assert_eq!(tag.short_name().map(TagName::as_str), Some("vip"));
        assert_eq!(tag.description(), Some("high value contacts"));
    }

    #[test]
    fn new_shortlink_requires_long_url_and_defaults_to_active() {
        let err = NewShortlink::new("  ").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Empty {
                field: LONG_URL_FIELD
            }
        ));

        let link = NewShortlink::new("https://example.com/landing").unwrap();
        assert_eq!(link.status(), ShortlinkStatus::Active);
        assert!(link.name().is_none());
        assert!(link.alias().is_none());
    }

    #[test]
    fn send_message_carries_optional_id() {
        let msg = SendMessage::new(
            Msisdn::new("50212345678").unwrap(),
            MessageText::new("hello").unwrap(),
        );
        assert!(msg.id().is_none());

        let msg = msg.with_id("order-42");
        assert_eq!(msg.id(), Some("order-42"));
    }

    #[test]
    fn api_response_data_as_decodes_typed_payloads() {
        #[derive(serde::Deserialize)]
        struct Contact {
            msisdn: String,
        }

        let response = ApiResponse {
            code: 200,
            status: "OK".to_owned(),
            ok: true,
            data: serde_json::json!({ "msisdn": "50212345678" }),
            headers: Default::default(),
            error: None,
        };

        let contact: Contact = response.data_as().unwrap();
        assert_eq!(contact.msisdn, "50212345678");
    }
}
