use serde_json::{Map, Value};

use crate::domain::{ContactFields, ContactStatus, ListContactsParams, Msisdn, NewContact};

pub fn list_contacts_query(params: &ListContactsParams) -> Vec<(String, String)> {
    let mut query = Vec::<(String, String)>::new();

    if let Some(text) = params.query.as_deref() {
        query.push(("query".to_owned(), text.to_owned()));
    }
    if let Some(status) = params.status {
        query.push((ContactStatus::FIELD.to_owned(), status.as_str().to_owned()));
    }
    if let Some(limit) = params.limit {
        query.push(("limit".to_owned(), limit.to_string()));
    }
    if let Some(start) = params.start {
        query.push(("start".to_owned(), start.to_string()));
    }
    if let Some(short_results) = params.short_results {
        query.push(("short_results".to_owned(), flag(short_results).to_owned()));
    }

    query
}

pub fn new_contact_body(contact: &NewContact) -> Value {
    let mut body = Map::new();
    body.insert(
        Msisdn::FIELD.to_owned(),
        Value::String(contact.msisdn().as_str().to_owned()),
    );
    body.insert(
        "country_code".to_owned(),
        Value::String(contact.country_code().to_owned()),
    );
    body.insert(
        "phone_number".to_owned(),
        Value::String(contact.phone_number().to_owned()),
    );
    push_fields(&mut body, contact.fields());
    Value::Object(body)
}

pub fn contact_fields_body(fields: &ContactFields) -> Value {
    let mut body = Map::new();
    push_fields(&mut body, fields);
    Value::Object(body)
}

fn push_fields(body: &mut Map<String, Value>, fields: &ContactFields) {
    let present = [
        ("first_name", fields.first_name.as_deref()),
        ("last_name", fields.last_name.as_deref()),
        ("custom_field_1", fields.custom_field_1.as_deref()),
        ("custom_field_2", fields.custom_field_2.as_deref()),
        ("custom_field_3", fields.custom_field_3.as_deref()),
        ("custom_field_4", fields.custom_field_4.as_deref()),
        ("custom_field_5", fields.custom_field_5.as_deref()),
    ];
    for (key, value) in present {
        if let Some(value) = value {
            body.insert(key.to_owned(), Value::String(value.to_owned()));
        }
    }
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn list_query_includes_only_set_filters() {
        let params = ListContactsParams {
            status: Some(ContactStatus::Subscribed),
            limit: Some(10),
            short_results: Some(false),
            ..Default::default()
        };

        assert_eq!(
            list_contacts_query(&params),
            vec![
                ("status".to_owned(), "SUBSCRIBED".to_owned()),
                ("limit".to_owned(), "10".to_owned()),
                ("short_results".to_owned(), "0".to_owned()),
            ]
        );
    }

    #[test]
    fn list_query_is_empty_for_default_params() {
        assert!(list_contacts_query(&ListContactsParams::default()).is_empty());
    }

    #[test]
    fn list_query_encodes_all_filters() {
        let params = ListContactsParams {
            query: Some("alice".to_owned()),
            status: Some(ContactStatus::Cancelled),
            limit: Some(25),
            start: Some(50),
            short_results: Some(true),
        };

        assert_eq!(
            list_contacts_query(&params),
            vec![
                ("query".to_owned(), "alice".to_owned()),
                ("status".to_owned(), "CANCELLED".to_owned()),
                ("limit".to_owned(), "25".to_owned()),
                ("start".to_owned(), "50".to_owned()),
                ("short_results".to_owned(), "1".to_owned()),
            ]
        );
    }

    #[test]
    fn new_contact_body_joins_the_subscriber_id() {
        let fields = ContactFields {
            first_name: Some("Alice".to_owned()),
            last_name: Some("Smith".to_owned()),
            custom_field_1: Some("VIP".to_owned()),
            ..Default::default()
        };
        let contact = NewContact::new("502", "12345678", fields).unwrap();

        assert_eq!(
            new_contact_body(&contact),
            json!({
                "msisdn": "50212345678",
                "country_code": "502",
                "phone_number": "12345678",
                "first_name": "Alice",
                "last_name": "Smith",
                "custom_field_1": "VIP",
            })
        );
    }

    #[test]
    fn fields_body_skips_absent_fields() {
        let fields = ContactFields {
            last_name: Some("Smith".to_owned()),
            custom_field_3: Some("Premium".to_owned()),
            ..Default::default()
        };

        assert_eq!(
            contact_fields_body(&fields),
            json!({
                "last_name": "Smith",
                "custom_field_3": "Premium",
            })
        );
    }

    #[test]
    fn fields_body_is_an_empty_object_for_default_fields() {
        assert_eq!(contact_fields_body(&ContactFields::default()), json!({}));
    }
}
