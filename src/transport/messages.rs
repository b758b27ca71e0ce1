use serde_json::{Map, Value};

use crate::domain::{
    DeliveryReportsParams, ListMessagesParams, MessageDirection, MessageText, Msisdn, SendMessage,
    SendToTags, TAGS_FIELD,
};

pub fn list_messages_query(params: &ListMessagesParams) -> Vec<(String, String)> {
    let mut query = Vec::<(String, String)>::new();

    if let Some(start_date) = params.start_date {
        query.push(("start_date".to_owned(), start_date.to_wire()));
    }
    if let Some(end_date) = params.end_date {
        query.push(("end_date".to_owned(), end_date.to_wire()));
    }
    if let Some(limit) = params.limit {
        query.push(("limit".to_owned(), limit.to_string()));
    }
    if let Some(direction) = params.direction {
        query.push((
            MessageDirection::FIELD.to_owned(),
            direction.as_str().to_owned(),
        ));
    }
    if let Some(msisdn) = params.msisdn.as_ref() {
        query.push((Msisdn::FIELD.to_owned(), msisdn.as_str().to_owned()));
    }
    if let Some(enabled) = params.delivery_status_enable {
        query.push(("delivery_status_enable".to_owned(), enabled.to_string()));
    }

    query
}

pub fn delivery_reports_query(params: &DeliveryReportsParams) -> Vec<(String, String)> {
    let mut query = Vec::<(String, String)>::new();

    if let Some(start_date) = params.start_date {
        query.push(("start_date".to_owned(), start_date.to_wire()));
    }
    if let Some(end_date) = params.end_date {
        query.push(("end_date".to_owned(), end_date.to_wire()));
    }
    if let Some(limit) = params.limit {
        query.push(("limit".to_owned(), limit.to_string()));
    }
    if let Some(direction) = params.direction {
        query.push((
            MessageDirection::FIELD.to_owned(),
            direction.as_str().to_owned(),
        ));
    }

    query
}

pub fn send_message_body(message: &SendMessage) -> Value {
    let mut body = Map::new();
    body.insert(
        Msisdn::FIELD.to_owned(),
        Value::String(message.msisdn().as_str().to_owned()),
    );
    body.insert(
        MessageText::FIELD.to_owned(),
        Value::String(message.message().as_str().to_owned()),
    );
    if let Some(id) = message.id() {
        body.insert("id".to_owned(), Value::String(id.to_owned()));
    }
    Value::Object(body)
}

pub fn send_to_tags_body(send: &SendToTags) -> Value {
    let tags = send
        .tags()
        .iter()
        .map(|tag| Value::String(tag.as_str().to_owned()))
        .collect();
    let mut body = Map::new();
    body.insert(TAGS_FIELD.to_owned(), Value::Array(tags));
    body.insert(
        MessageText::FIELD.to_owned(),
        Value::String(send.message().as_str().to_owned()),
    );
    if let Some(id) = send.id() {
        body.insert("id".to_owned(), Value::String(id.to_owned()));
    }
    Value::Object(body)
}
