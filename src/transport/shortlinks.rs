use serde_json::{Map, Value};

use crate::domain::{
    LONG_URL_FIELD, ListShortlinksParams, NewShortlink, ShortlinkAlias, ShortlinkId, ShortlinkName,
    ShortlinkStatus,
};

// An id filter short-circuits every other filter upstream, so the query
// carries nothing else alongside it.
pub fn list_shortlinks_query(params: &ListShortlinksParams) -> Vec<(String, String)> {
    if let Some(id) = params.id.as_ref() {
        return shortlink_id_query(id);
    }

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
    if let Some(offset) = params.offset {
        query.push(("offset".to_owned(), offset.to_string()));
    }

    query
}

pub fn shortlink_id_query(id: &ShortlinkId) -> Vec<(String, String)> {
    vec![(ShortlinkId::FIELD.to_owned(), id.as_str().to_owned())]
}

pub fn new_shortlink_body(link: &NewShortlink) -> Value {
    let mut body = Map::new();
    body.insert(
        LONG_URL_FIELD.to_owned(),
        Value::String(link.long_url().to_owned()),
    );
    body.insert(
        ShortlinkStatus::FIELD.to_owned(),
        Value::String(link.status().as_str().to_owned()),
    );
    if let Some(name) = link.name() {
        body.insert(
            ShortlinkName::FIELD.to_owned(),
            Value::String(name.as_str().to_owned()),
        );
    }
    if let Some(alias) = link.alias() {
        body.insert(
            ShortlinkAlias::FIELD.to_owned(),
            Value::String(alias.as_str().to_owned()),
        );
    }
    Value::Object(body)
}

pub fn shortlink_status_body(status: ShortlinkStatus) -> Value {
    let mut body = Map::new();
    body.insert(
        ShortlinkStatus::FIELD.to_owned(),
        Value::String(status.as_str().to_owned()),
    );
    Value::Object(body)
}
