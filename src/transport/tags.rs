use serde_json::{Map, Value};

use crate::domain::{
    ContactStatus, ListTagsParams, MSISDNS_FIELD, Msisdn, NAME_FIELD, NewTag, TagContactsParams,
    TagName, TagUpdate,
};

pub fn list_tags_query(params: &ListTagsParams) -> Vec<(String, String)> {
    let mut query = Vec::<(String, String)>::new();

    if let Some(text) = params.query.as_deref() {
        query.push(("query".to_owned(), text.to_owned()));
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

// The upstream wants the tag name repeated as a query parameter even though
// it is already part of the path.
pub fn tag_name_query(name: &TagName) -> Vec<(String, String)> {
    vec![(TagName::FIELD.to_owned(), name.as_str().to_owned())]
}

pub fn tag_contacts_query(name: &TagName, params: &TagContactsParams) -> Vec<(String, String)> {
    let mut query = tag_name_query(name);

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

pub fn new_tag_body(tag: &NewTag) -> Value {
    let mut body = Map::new();
    body.insert(NAME_FIELD.to_owned(), Value::String(tag.name().to_owned()));
    if let Some(short_name) = tag.short_name() {
        body.insert(
            "short_name".to_owned(),
            Value::String(short_name.as_str().to_owned()),
        );
    }
    if let Some(description) = tag.description() {
        body.insert(
            "description".to_owned(),
            Value::String(description.to_owned()),
        );
    }
    Value::Object(body)
}

pub fn tag_update_body(update: &TagUpdate) -> Value {
    let mut body = Map::new();
    if let Some(name) = update.name.as_deref() {
        body.insert(NAME_FIELD.to_owned(), Value::String(name.to_owned()));
    }
    if let Some(description) = update.description.as_deref() {
        body.insert(
            "description".to_owned(),
            Value::String(description.to_owned()),
        );
    }
    Value::Object(body)
}

pub fn tag_members_body(msisdns: &[Msisdn]) -> Value {
    let members = msisdns
        .iter()
        .map(|msisdn| Value::String(msisdn.as_str().to_owned()))
        .collect();
    let mut body = Map::new();
    body.insert(MSISDNS_FIELD.to_owned(), Value::Array(members));
    Value::Object(body)
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}
