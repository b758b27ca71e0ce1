use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use phonenumber::country;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Subscriber identifier: country code and local number joined into one
/// digit string (`50212345678`).
///
/// Invariant: non-empty, ASCII digits only.
pub struct Msisdn(String);

impl Msisdn {
    /// Wire field name (`msisdn`).
    pub const FIELD: &'static str = "msisdn";

    /// Create a validated [`Msisdn`] from an already-joined digit string.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidMsisdn {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Join a country code and a local number into a subscriber id.
    ///
    /// `from_parts("502", "12345678")` yields `50212345678`.
    pub fn from_parts(
        country_code: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let country_code = digits_part("country_code", country_code.into())?;
        let phone_number = digits_part("phone_number", phone_number.into())?;
        Ok(Self(format!("{country_code}{phone_number}")))
    }

    /// Parse a human-entered phone number (`+502 1234-5678`) and normalize
    /// it to the digits-only subscriber id.
    ///
    /// `default_region` is used when the input has no explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidMsisdn { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self(e164.trim_start_matches('+').to_owned()))
    }

    /// Borrow the joined digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn digits_part(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidMsisdn {
            input: trimmed.to_owned(),
        });
    }
    Ok(trimmed.to_owned())
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Tag short name, used both in endpoint paths and as the `tag_name` query
/// parameter.
///
/// Invariant: non-empty after trimming.
pub struct TagName(String);

impl TagName {
    /// Wire field name (`tag_name`).
    pub const FIELD: &'static str = "tag_name";

    /// Create a validated [`TagName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated short name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message body (`message`).
///
/// Invariant: non-empty after trimming. The original value (including
/// whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Wire field name (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Shortlink identifier (`id`) as returned by the shortlink endpoints.
///
/// Invariant: non-empty after trimming.
pub struct ShortlinkId(String);

impl ShortlinkId {
    /// Wire field name (`id`).
    pub const FIELD: &'static str = "id";

    /// Create a validated [`ShortlinkId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Shortlink display name (`name`).
///
/// Invariant: non-empty after trimming, at most [`ShortlinkName::MAX_LEN`]
/// characters.
pub struct ShortlinkName(String);

impl ShortlinkName {
    /// Wire field name (`name`).
    pub const FIELD: &'static str = "name";

    /// Maximum accepted length in characters.
    pub const MAX_LEN: usize = 50;

    /// Create a validated [`ShortlinkName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let len = trimmed.chars().count();
        if len > Self::MAX_LEN {
            return Err(ValidationError::NameTooLong {
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Shortlink custom alias (`alias`), which becomes part of the short URL.
///
/// Invariant: non-empty after trimming, at most [`ShortlinkAlias::MAX_LEN`]
/// characters, no whitespace anywhere.
pub struct ShortlinkAlias(String);

impl ShortlinkAlias {
    /// Wire field name (`alias`).
    pub const FIELD: &'static str = "alias";

    /// Maximum accepted length in characters.
    pub const MAX_LEN: usize = 30;

    /// Create a validated [`ShortlinkAlias`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let len = trimmed.chars().count();
        if len > Self::MAX_LEN {
            return Err(ValidationError::AliasTooLong {
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ValidationError::AliasContainsWhitespace);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated alias.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Timestamp for date-range filters, sent as `YYYY-MM-DD HH:MM:SS`.
pub struct ApiDate(NaiveDateTime);

impl ApiDate {
    /// Wire format for date values.
    pub const WIRE_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    /// Parse a date string in the wire format or as a bare `YYYY-MM-DD`
    /// (widened to midnight).
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if let Ok(value) = NaiveDateTime::parse_from_str(trimmed, Self::WIRE_FORMAT) {
            return Ok(Self(value));
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Self(date.and_time(NaiveTime::MIN)));
        }
        Err(ValidationError::InvalidDate {
            input: trimmed.to_owned(),
        })
    }

    /// Render the value in the wire format.
    pub fn to_wire(self) -> String {
        self.0.format(Self::WIRE_FORMAT).to_string()
    }

    /// Get the underlying timestamp.
    pub fn value(self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for ApiDate {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl From<DateTime<Utc>> for ApiDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.naive_utc())
    }
}

impl From<NaiveDate> for ApiDate {
    fn from(value: NaiveDate) -> Self {
        Self(value.and_time(NaiveTime::MIN))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Contact subscription status filter (`status`).
pub enum ContactStatus {
    Subscribed,
    Invited,
    Confirmed,
    Cancelled,
}

impl ContactStatus {
    /// Wire field name (`status`).
    pub const FIELD: &'static str = "status";

    /// Wire representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Subscribed => "SUBSCRIBED",
            Self::Invited => "INVITED",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parse an exact wire value into a status.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input {
            "SUBSCRIBED" => Ok(Self::Subscribed),
            "INVITED" => Ok(Self::Invited),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(ValidationError::InvalidContactStatus {
                input: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Shortlink lifecycle status (`status`).
pub enum ShortlinkStatus {
    #[default]
    Active,
    Inactive,
}

impl ShortlinkStatus {
    /// Wire field name (`status`).
    pub const FIELD: &'static str = "status";

    /// Wire representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }

    /// Parse a status value; input is trimmed and case-folded before
    /// matching.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim().to_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            _ => Err(ValidationError::InvalidShortlinkStatus {
                input: input.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Message direction filter (`direction`): mobile-terminated (outgoing) or
/// mobile-originated (incoming).
pub enum MessageDirection {
    Mt,
    Mo,
}

impl MessageDirection {
    /// Wire field name (`direction`).
    pub const FIELD: &'static str = "direction";

    /// Wire representation of the direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mt => "MT",
            Self::Mo => "MO",
        }
    }
}
