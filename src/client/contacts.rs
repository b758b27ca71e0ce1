use std::sync::Arc;

use crate::domain::{ApiResponse, ContactFields, ListContactsParams, Msisdn, NewContact, TagName};
use crate::transport::{contact_fields_body, list_contacts_query, new_contact_body};

use super::{Dispatcher, ImError, RequestSpec};

#[derive(Clone)]
/// Contact book operations.
pub struct Contacts {
    dispatcher: Arc<Dispatcher>,
}

impl Contacts {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// List contacts, optionally filtered.
    pub async fn list(&self, params: &ListContactsParams) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::get("contacts").with_params(list_contacts_query(params));
        self.dispatcher.request(spec).await
    }

    /// Create a contact.
    ///
    /// The country code and phone number are joined into the subscriber id,
    /// which appears both in the endpoint path and in the request body.
    pub async fn create(&self, contact: &NewContact) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::post(format!("contacts/{}", contact.msisdn().as_str()))
            .with_body(new_contact_body(contact));
        self.dispatcher.request(spec).await
    }

    /// Fetch a single contact.
    pub async fn get(&self, msisdn: &Msisdn) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::get(format!("contacts/{}", msisdn.as_str()));
        self.dispatcher.request(spec).await
    }

    /// Update a contact's profile fields. Absent fields are left untouched.
    pub async fn update(
        &self,
        msisdn: &Msisdn,
        fields: &ContactFields,
    ) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::put(format!("contacts/{}", msisdn.as_str()))
            .with_body(contact_fields_body(fields));
        self.dispatcher.request(spec).await
    }

    /// Delete a contact.
    pub async fn delete(&self, msisdn: &Msisdn) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::delete(format!("contacts/{}", msisdn.as_str()));
        self.dispatcher.request(spec).await
    }

    /// List the groups a contact belongs to.
    pub async fn groups(&self, msisdn: &Msisdn) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::get(format!("contacts/{}/groups", msisdn.as_str()));
        self.dispatcher.request(spec).await
    }

    /// Attach a tag to a contact.
    pub async fn add_tag(&self, msisdn: &Msisdn, tag: &TagName) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::post(format!(
            "contacts/{}/tags/{}",
            msisdn.as_str(),
            tag.as_str()
        ));
        self.dispatcher.request(spec).await
    }

    /// Detach a tag from a contact.
    pub async fn remove_tag(
        &self,
        msisdn: &Msisdn,
        tag: &TagName,
    ) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::delete(format!(
            "contacts/{}/tags/{}",
            msisdn.as_str(),
            tag.as_str()
        ));
        self.dispatcher.request(spec).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::client::HttpMethod;
    use crate::client::testkit::{FakeTransport, make_dispatcher};
    use crate::domain::ContactStatus;

    use super::*;

    fn body_json(body: Option<&str>) -> Value {
        serde_json::from_str(body.expect("request has no body")).unwrap()
    }

    #[tokio::test]
    async fn list_sends_filters_in_canonical_order() {
        let transport = FakeTransport::new(200, r#"{"items": []}"#);
        let contacts = Contacts::new(make_dispatcher(transport.clone()));

        let params = ListContactsParams {
            status: Some(ContactStatus::Subscribed),
            limit: Some(10),
            ..Default::default()
        };
        contacts.list(&params).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url.path(), "/v1/contacts");
        assert_eq!(request.url.query(), Some("limit=10&status=SUBSCRIBED"));
    }

    #[tokio::test]
    async fn create_posts_to_the_joined_subscriber_id() {
        let transport = FakeTransport::new(201, "{}");
        let contacts = Contacts::new(make_dispatcher(transport.clone()));

        let fields = ContactFields {
            first_name: Some("Alice".to_owned()),
            ..Default::default()
        };
        let contact = NewContact::new("502", "12345678", fields).unwrap();
        contacts.create(&contact).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url.path(), "/v1/contacts/50212345678");
        assert_eq!(
            body_json(request.body.as_deref()),
            json!({
                "msisdn": "50212345678",
                "country_code": "502",
                "phone_number": "12345678",
                "first_name": "Alice",
            })
        );
    }

    #[tokio::test]
    async fn update_puts_only_the_present_fields() {
        let transport = FakeTransport::new(200, "{}");
        let contacts = Contacts::new(make_dispatcher(transport.clone()));

        let msisdn = Msisdn::new("50212345678").unwrap();
        let fields = ContactFields {
            last_name: Some("Smith".to_owned()),
            custom_field_2: Some("Premium".to_owned()),
            ..Default::default()
        };
        contacts.update(&msisdn, &fields).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.url.path(), "/v1/contacts/50212345678");
        assert_eq!(
            body_json(request.body.as_deref()),
            json!({ "last_name": "Smith", "custom_field_2": "Premium" })
        );
    }

    #[tokio::test]
    async fn delete_targets_the_contact_path_without_a_body() {
        let transport = FakeTransport::new(204, "");
        let contacts = Contacts::new(make_dispatcher(transport.clone()));

        let msisdn = Msisdn::new("50212345678").unwrap();
        contacts.delete(&msisdn).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.url.path(), "/v1/contacts/50212345678");
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn groups_targets_the_nested_path() {
        let transport = FakeTransport::new(200, r#"{"groups": []}"#);
        let contacts = Contacts::new(make_dispatcher(transport.clone()));

        let msisdn = Msisdn::new("50212345678").unwrap();
        contacts.groups(&msisdn).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.url.path(), "/v1/contacts/50212345678/groups");
    }

    #[tokio::test]
    async fn tag_membership_uses_nested_tag_paths() {
        let transport = FakeTransport::new(200, "{}");
        let contacts = Contacts::new(make_dispatcher(transport.clone()));

        let msisdn = Msisdn::new("50212345678").unwrap();
        let tag = TagName::new("vip").unwrap();

        contacts.add_tag(&msisdn, &tag).await.unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url.path(), "/v1/contacts/50212345678/tags/vip");

        contacts.remove_tag(&msisdn, &tag).await.unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.url.path(), "/v1/contacts/50212345678/tags/vip");
    }

    #[tokio::test]
    async fn a_not_found_contact_comes_back_as_an_envelope() {
        let transport = FakeTransport::new(404, r#"{"message": "unknown contact"}"#);
        let contacts = Contacts::new(make_dispatcher(transport.clone()));

        let msisdn = Msisdn::new("50200000000").unwrap();
        let response = contacts.get(&msisdn).await.unwrap();

        assert!(!response.ok);
        assert_eq!(response.code, 404);
        assert_eq!(response.data["message"], "unknown contact");
    }
}
