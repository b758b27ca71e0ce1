use std::sync::Arc;

use tracing::warn;

use crate::domain::{
    ApiResponse, ListShortlinksParams, NewShortlink, ShortlinkAlias, ShortlinkId, ShortlinkStatus,
    ValidationError,
};
use crate::transport::{
    list_shortlinks_query, new_shortlink_body, shortlink_id_query, shortlink_status_body,
};

use super::{Dispatcher, ImError, RequestSpec};

#[derive(Clone)]
/// Short link operations.
pub struct Shortlinks {
    dispatcher: Arc<Dispatcher>,
}

impl Shortlinks {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// List short links.
    ///
    /// When `params.id` is set it is the only filter sent; the date range,
    /// limit and offset are ignored for that call.
    pub async fn list(&self, params: &ListShortlinksParams) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::get("short_link/").with_params(list_shortlinks_query(params));
        self.dispatcher.request(spec).await
    }

    /// Fetch a single short link by id.
    pub async fn get(&self, id: &ShortlinkId) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::get("short_link/").with_params(shortlink_id_query(id));
        self.dispatcher.request(spec).await
    }

    /// Create a short link.
    pub async fn create(&self, link: &NewShortlink) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::post("short_link").with_body(new_shortlink_body(link));
        self.dispatcher.request(spec).await
    }

    /// Create a short link with a custom alias; rejects links without one.
    pub async fn create_with_alias(&self, link: &NewShortlink) -> Result<ApiResponse, ImError> {
        if link.alias().is_none() {
            return Err(ValidationError::Empty {
                field: ShortlinkAlias::FIELD,
            }
            .into());
        }
        self.create(link).await
    }

    /// Activate or deactivate a short link.
    ///
    /// The backend rejects reactivation, so switching to
    /// [`ShortlinkStatus::Active`] logs a warning and will usually come back
    /// as an `ok = false` envelope.
    pub async fn update_status(
        &self,
        id: &ShortlinkId,
        status: ShortlinkStatus,
    ) -> Result<ApiResponse, ImError> {
        if status == ShortlinkStatus::Active {
            warn!(
                id = id.as_str(),
                "short link reactivation is rejected upstream"
            );
        }

        let spec = RequestSpec::put(format!("short_link/{}/status", id.as_str()))
            .with_params(shortlink_id_query(id))
            .with_body(shortlink_status_body(status));
        self.dispatcher.request(spec).await
    }
}
