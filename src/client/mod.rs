//! Client layer: credentials, request signing and dispatch, resource groups.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::domain::{ApiResponse, ListContactsParams, ValidationError};
use crate::transport::{encode_query, http_date, signed_headers};

mod contacts;
mod messages;
mod shortlinks;
mod tags;

pub use contacts::Contacts;
pub use messages::{BulkSendReport, Messages, RecipientOutcome};
pub use shortlinks::Shortlinks;
pub use tags::Tags;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const CONTENT_TYPE: &str = "application/json; charset=utf-8";
const ORIGIN_HEADER: &str = "X-IM-ORIGIN";
const ORIGIN_VALUE: &str = "IM_SDK_RUST_V1";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct WireRequest {
    pub(crate) method: HttpMethod,
    pub(crate) url: Url,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Option<String>,
}

#[derive(Debug, Clone)]
struct WireResponse {
    status: u16,
    reason: String,
    headers: BTreeMap<String, String>,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: WireRequest,
    ) -> BoxFuture<'a, Result<WireResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: WireRequest,
    ) -> BoxFuture<'a, Result<WireResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
                HttpMethod::Put => reqwest::Method::PUT,
                HttpMethod::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self
                .client
                .request(method, request.url)
                .timeout(self.timeout);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let reason = response
                .status()
                .canonical_reason()
                .unwrap_or_default()
                .to_owned();
            let headers = response
                .headers()
                .iter()
                .map(|(name, value)| {
                    (
                        name.as_str().to_owned(),
                        String::from_utf8_lossy(value.as_bytes()).into_owned(),
                    )
                })
                .collect();
            let body = response.text().await?;

            Ok(WireResponse {
                status,
                reason,
                headers,
                body,
            })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors raised while assembling [`Credentials`].
pub enum ConfigurationError {
    /// A credential part was empty after trimming.
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    /// The base URL did not parse as an absolute URL.
    #[error("invalid base URL {input:?}")]
    InvalidBaseUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// The base URL parses but cannot carry endpoint paths (e.g. `mailto:`).
    #[error("base URL {input:?} cannot be a base for endpoint paths")]
    CannotBeABase { input: String },
}

#[derive(Clone)]
/// API key/secret pair plus the base URL all requests are issued against.
///
/// The secret only feeds the request signature; it is never sent on the wire
/// and is redacted from `Debug` output.
pub struct Credentials {
    api_key: String,
    api_secret: String,
    base_url: Url,
}

impl Credentials {
    /// Validate and assemble credentials.
    ///
    /// Both key parts must be non-empty after trimming, and `base_url` must
    /// parse as an absolute URL. The URL path is normalized to end with `/`
    /// so that endpoint joins append instead of replacing the last segment.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let api_key = api_key.into().trim().to_owned();
        if api_key.is_empty() {
            return Err(ConfigurationError::Empty { field: "api_key" });
        }

        let api_secret = api_secret.into().trim().to_owned();
        if api_secret.is_empty() {
            return Err(ConfigurationError::Empty { field: "api_secret" });
        }

        let input = base_url.into();
        let mut base_url =
            Url::parse(input.trim()).map_err(|source| ConfigurationError::InvalidBaseUrl {
                input: input.clone(),
                source,
            })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigurationError::CannotBeABase { input });
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            api_key,
            api_secret,
            base_url,
        })
    }

    /// The public API key (sent in the `Authorization` header).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ImClient`] and its resource groups.
///
/// Note that HTTP responses with non-2xx status codes are NOT errors: they
/// come back as `ok = false` envelopes. This error only covers failures
/// where no HTTP response exists, plus local validation and configuration
/// problems that prevent a request from being issued at all.
pub enum ImError {
    /// Credentials could not be assembled.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An endpoint path could not be joined onto the base URL.
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),
}

#[derive(Debug, Clone)]
pub(crate) struct RequestSpec {
    method: HttpMethod,
    endpoint: String,
    params: Vec<(String, String)>,
    body: Option<Value>,
}

impl RequestSpec {
    pub(crate) fn get(endpoint: impl Into<String>) -> Self {
        Self::with_method(HttpMethod::Get, endpoint)
    }

    pub(crate) fn post(endpoint: impl Into<String>) -> Self {
        Self::with_method(HttpMethod::Post, endpoint)
    }

    pub(crate) fn put(endpoint: impl Into<String>) -> Self {
        Self::with_method(HttpMethod::Put, endpoint)
    }

    pub(crate) fn delete(endpoint: impl Into<String>) -> Self {
        Self::with_method(HttpMethod::Delete, endpoint)
    }

    fn with_method(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            params: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn with_params(mut self, params: Vec<(String, String)>) -> Self {
        self.params = params;
        self
    }

    pub(crate) fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Signs and executes request specifications. Shared by all resource groups.
pub(crate) struct Dispatcher {
    credentials: Credentials,
    http: Arc<dyn HttpTransport>,
}

impl Dispatcher {
    pub(crate) async fn request(&self, spec: RequestSpec) -> Result<ApiResponse, ImError> {
        // The signature must cover the exact bytes sent, so the query and
        // body are each rendered once and reused for both the signature and
        // the wire request.
        let query = encode_query(&spec.params);
        let body = spec.body.as_ref().map(Value::to_string);
        let date = http_date(Utc::now());
        let signed = signed_headers(
            &self.credentials.api_key,
            &self.credentials.api_secret,
            &date,
            &query,
            body.as_deref().unwrap_or_default(),
        );

        let mut url = self.credentials.base_url.join(&spec.endpoint)?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        let headers = vec![
            ("Content-Type".to_owned(), CONTENT_TYPE.to_owned()),
            ("Date".to_owned(), signed.date),
            ("Authorization".to_owned(), signed.authorization),
            (ORIGIN_HEADER.to_owned(), ORIGIN_VALUE.to_owned()),
        ];

        debug!(method = spec.method.as_str(), url = %url, "dispatching request");

        let response = self
            .http
            .execute(WireRequest {
                method: spec.method,
                url,
                headers,
                body,
            })
            .await
            .map_err(ImError::Transport)?;

        debug!(status = response.status, "response received");

        Ok(envelope(response))
    }
}

fn envelope(response: WireResponse) -> ApiResponse {
    let ok = (200..=299).contains(&response.status);
    let error = if ok {
        None
    } else {
        Some(format!(
            "request failed with status code {}",
            response.status
        ))
    };

    ApiResponse {
        code: response.status,
        status: response.reason,
        ok,
        data: decode_data(&response.body),
        headers: response.headers,
        error,
    }
}

fn decode_data(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_owned()))
}

#[derive(Debug, Clone)]
/// Builder for [`ImClient`].
///
/// Use this when you need to adjust the request timeout or the HTTP
/// `User-Agent`.
pub struct ImClientBuilder {
    credentials: Credentials,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ImClientBuilder {
    /// Create a builder with the default 30 s timeout and no user-agent
    /// override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the timeout applied to every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build an [`ImClient`].
    pub fn build(self) -> Result<ImClient, ImError> {
        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| ImError::Transport(Box::new(err)))?;

        Ok(ImClient::with_transport(
            self.credentials,
            Arc::new(ReqwestTransport {
                client,
                timeout: self.timeout,
            }),
        ))
    }
}

#[derive(Clone)]
/// High-level API client.
///
/// Every request is signed with HMAC-SHA1 over the API key, the HTTP date,
/// the canonical query string and the JSON body, and carries the signature
/// in the `Authorization` header. Responses come back as uniform
/// [`ApiResponse`] envelopes; see [`ImError`] for what is and is not an
/// error.
///
/// The client is cheap to clone: all resource groups share one dispatcher.
pub struct ImClient {
    contacts: Contacts,
    messages: Messages,
    tags: Tags,
    shortlinks: Shortlinks,
}

impl ImClient {
    /// Create a client with the default transport and 30 s request timeout.
    ///
    /// For more customization, use [`ImClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self::with_transport(
            credentials,
            Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
                timeout: DEFAULT_TIMEOUT,
            }),
        )
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> ImClientBuilder {
        ImClientBuilder::new(credentials)
    }

    fn with_transport(credentials: Credentials, http: Arc<dyn HttpTransport>) -> Self {
        let dispatcher = Arc::new(Dispatcher { credentials, http });
        Self {
            contacts: Contacts::new(Arc::clone(&dispatcher)),
            messages: Messages::new(Arc::clone(&dispatcher)),
            tags: Tags::new(Arc::clone(&dispatcher)),
            shortlinks: Shortlinks::new(dispatcher),
        }
    }

    /// Contact book operations.
    pub fn contacts(&self) -> &Contacts {
        &self.contacts
    }

    /// Message sending and history operations.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Tag (contact segment) operations.
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Short link operations.
    pub fn shortlinks(&self) -> &Shortlinks {
        &self.shortlinks
    }

    /// Smoke-check the configured credentials by listing a single contact.
    pub async fn test_connection(&self) -> Result<ApiResponse, ImError> {
        let params = ListContactsParams {
            limit: Some(1),
            ..Default::default()
        };
        self.contacts.list(&params).await
    }
}
