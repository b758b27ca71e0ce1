use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
/// Uniform envelope for every HTTP response the API returns.
///
/// Non-2xx responses are still envelopes (`ok == false`), never errors:
/// callers branch on [`ApiResponse::ok`] or [`ApiResponse::code`].
pub struct ApiResponse {
    /// HTTP status code.
    pub code: u16,
    /// HTTP reason phrase (`OK`, `Not Found`, ...). Empty when unknown.
    pub status: String,
    /// Whether the status code is in `200..=299`.
    pub ok: bool,
    /// Parsed response body. `Null` when the body was empty; a JSON string
    /// holding the raw body when it was not valid JSON.
    pub data: serde_json::Value,
    /// Response headers.
    pub headers: BTreeMap<String, String>,
    /// Short failure summary, present only when `ok == false`.
    pub error: Option<String>,
}

impl ApiResponse {
    /// Deserialize [`ApiResponse::data`] into a caller-provided type.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.clone())
    }
}
