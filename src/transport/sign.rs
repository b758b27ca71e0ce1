use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

/// `Authorization` scheme literal.
pub const AUTH_SCHEME: &str = "IM";

/// RFC 7231 fixdate layout used for the `Date` header.
const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

type HmacSha1 = Hmac<Sha1>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// The two signed headers attached to every request.
pub struct SignedHeaders {
    pub date: String,
    pub authorization: String,
}

/// Format a timestamp as an RFC 7231 HTTP date (`Wed, 21 Oct 2015 07:28:00 GMT`).
pub fn http_date(at: DateTime<Utc>) -> String {
    at.format(DATE_FORMAT).to_string()
}

/// Assemble the string covered by the signature: API key, HTTP date,
/// canonical query, compact JSON body, concatenated without separators.
/// Absent query and body contribute empty strings.
pub fn canonical_string(api_key: &str, date: &str, encoded_query: &str, body: &str) -> String {
    format!("{api_key}{date}{encoded_query}{body}")
}

/// Base64-encoded HMAC-SHA1 of `message` keyed with the API secret.
pub fn sign(api_secret: &str, message: &str) -> String {
    let mut mac =
        HmacSha1::new_from_slice(api_secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

/// Build the `Date` + `Authorization` header pair for one request attempt.
///
/// The same `date` value must be sent as the `Date` header; it is part of
/// the signed material.
pub fn signed_headers(
    api_key: &str,
    api_secret: &str,
    date: &str,
    encoded_query: &str,
    body: &str,
) -> SignedHeaders {
    let canonical = canonical_string(api_key, date, encoded_query, body);
    let signature = sign(api_secret, &canonical);
    SignedHeaders {
        date: date.to_owned(),
        authorization: format!("{AUTH_SCHEME} {api_key}:{signature}"),
    }
}
