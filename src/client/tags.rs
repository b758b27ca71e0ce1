use std::sync::Arc;

use crate::domain::{
    ApiResponse, ListTagsParams, MSISDNS_FIELD, Msisdn, NewTag, TagContactsParams, TagName,
    TagUpdate, ValidationError,
};
use crate::transport::{
    list_tags_query, new_tag_body, tag_contacts_query, tag_members_body, tag_name_query,
    tag_update_body,
};

use super::{Dispatcher, ImError, RequestSpec};

#[derive(Clone)]
/// Tag (contact segment) operations.
pub struct Tags {
    dispatcher: Arc<Dispatcher>,
}

impl Tags {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// List tags, optionally filtered.
    pub async fn list(&self, params: &ListTagsParams) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::get("tags").with_params(list_tags_query(params));
        self.dispatcher.request(spec).await
    }

    /// Fetch a single tag.
    pub async fn get(&self, name: &TagName) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::get(format!("tags/{}", name.as_str()))
            .with_params(tag_name_query(name));
        self.dispatcher.request(spec).await
    }

    /// List the contacts carrying a tag.
    pub async fn contacts(
        &self,
        name: &TagName,
        params: &TagContactsParams,
    ) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::get(format!("tags/{}/contacts", name.as_str()))
            .with_params(tag_contacts_query(name, params));
        self.dispatcher.request(spec).await
    }

    /// Create a tag.
    pub async fn create(&self, tag: &NewTag) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::post("tags").with_body(new_tag_body(tag));
        self.dispatcher.request(spec).await
    }

    /// Update a tag's name and/or description.
    pub async fn update(&self, name: &TagName, update: &TagUpdate) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::put(format!("tags/{}", name.as_str()))
            .with_params(tag_name_query(name))
            .with_body(tag_update_body(update));
        self.dispatcher.request(spec).await
    }

    /// Delete a tag.
    pub async fn delete(&self, name: &TagName) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::delete(format!("tags/{}", name.as_str()))
            .with_params(tag_name_query(name));
        self.dispatcher.request(spec).await
    }

    /// Attach a tag to every listed contact. The list must be non-empty.
    pub async fn add_contacts(
        &self,
        name: &TagName,
        msisdns: &[Msisdn],
    ) -> Result<ApiResponse, ImError> {
        require_members(msisdns)?;
        let spec = RequestSpec::post(format!("tags/{}/contacts", name.as_str()))
            .with_params(tag_name_query(name))
            .with_body(tag_members_body(msisdns));
        self.dispatcher.request(spec).await
    }

    /// Detach a tag from every listed contact. The list must be non-empty.
    ///
    /// The membership list travels in a DELETE request body, which the
    /// upstream accepts for this endpoint.
    pub async fn remove_contacts(
        &self,
        name: &TagName,
        msisdns: &[Msisdn],
    ) -> Result<ApiResponse, ImError> {
        require_members(msisdns)?;
        let spec = RequestSpec::delete(format!("tags/{}/contacts", name.as_str()))
            .with_params(tag_name_query(name))
            .with_body(tag_members_body(msisdns));
        self.dispatcher.request(spec).await
    }
}

fn require_members(msisdns: &[Msisdn]) -> Result<(), ValidationError> {
    if msisdns.is_empty() {
        return Err(ValidationError::Empty {
            field: MSISDNS_FIELD,
        });
    }
    Ok(())
}
