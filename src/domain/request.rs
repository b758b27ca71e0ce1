use crate::domain::validation::ValidationError;
use crate::domain::value::{
    ApiDate, ContactStatus, MessageDirection, MessageText, Msisdn, ShortlinkAlias, ShortlinkId,
    ShortlinkName, ShortlinkStatus, TagName,
};

pub const MSISDNS_FIELD: &str = "msisdns";
pub const TAGS_FIELD: &str = "tags";
pub const LONG_URL_FIELD: &str = "long_url";
pub const NAME_FIELD: &str = "name";

#[derive(Debug, Clone, Default)]
pub struct ListContactsParams {
    pub query: Option<String>,
    pub status: Option<ContactStatus>,
    pub limit: Option<u32>,
    pub start: Option<u32>,
    pub short_results: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub custom_field_1: Option<String>,
    pub custom_field_2: Option<String>,
    pub custom_field_3: Option<String>,
    pub custom_field_4: Option<String>,
    pub custom_field_5: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewContact {
    msisdn: Msisdn,
    country_code: String,
    phone_number: String,
    fields: ContactFields,
}

impl NewContact {
    pub fn new(
        country_code: impl Into<String>,
        phone_number: impl Into<String>,
        fields: ContactFields,
    ) -> Result<Self, ValidationError> {
        let country_code = country_code.into().trim().to_owned();
        let phone_number = phone_number.into().trim().to_owned();
        let msisdn = Msisdn::from_parts(&country_code, &phone_number)?;
        Ok(Self {
            msisdn,
            country_code,
            phone_number,
            fields,
        })
    }

    pub fn msisdn(&self) -> &Msisdn {
        &self.msisdn
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListTagsParams {
    pub query: Option<String>,
    pub limit: Option<u32>,
    pub start: Option<u32>,
    pub short_results: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewTag {
    name: String,
    short_name: Option<TagName>,
    description: Option<String>,
}

impl NewTag {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: NAME_FIELD });
        }
        Ok(Self {
            name: trimmed.to_owned(),
            short_name: None,
            description: None,
        })
    }

    pub fn with_short_name(mut self, short_name: TagName) -> Self {
        self.short_name = Some(short_name);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> Option<&TagName> {
        self.short_name.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TagUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TagContactsParams {
    pub status: Option<ContactStatus>,
    pub limit: Option<u32>,
    pub start: Option<u32>,
    pub short_results: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct ListMessagesParams {
    pub start_date: Option<ApiDate>,
    pub end_date: Option<ApiDate>,
    pub limit: Option<u32>,
    pub direction: Option<MessageDirection>,
    pub msisdn: Option<Msisdn>,
    pub delivery_status_enable: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct DeliveryReportsParams {
    pub start_date: Option<ApiDate>,
    pub end_date: Option<ApiDate>,
    pub limit: Option<u32>,
    pub direction: Option<MessageDirection>,
}

#[derive(Debug, Clone)]
pub struct SendMessage {
    msisdn: Msisdn,
    message: MessageText,
    id: Option<String>,
}

impl SendMessage {
    pub fn new(msisdn: Msisdn, message: MessageText) -> Self {
        Self {
            msisdn,
            message,
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn msisdn(&self) -> &Msisdn {
        &self.msisdn
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct SendToContacts {
    recipients: Vec<Msisdn>,
    message: MessageText,
    id: Option<String>,
}

impl SendToContacts {
    pub fn new(recipients: Vec<Msisdn>, message: MessageText) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: MSISDNS_FIELD,
            });
        }
        Ok(Self {
            recipients,
            message,
            id: None,
        })
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn recipients(&self) -> &[Msisdn] {
        &self.recipients
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct SendToTags {
    tags: Vec<TagName>,
    message: MessageText,
    id: Option<String>,
}

impl SendToTags {
    pub fn new(tags: Vec<TagName>, message: MessageText) -> Result<Self, ValidationError> {
        if tags.is_empty() {
            return Err(ValidationError::Empty { field: TAGS_FIELD });
        }
        Ok(Self {
            tags,
            message,
            id: None,
        })
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn tags(&self) -> &[TagName] {
        &self.tags
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct NewShortlink {
    long_url: String,
    name: Option<ShortlinkName>,
    alias: Option<ShortlinkAlias>,
    status: ShortlinkStatus,
}

impl NewShortlink {
    pub fn new(long_url: impl Into<String>) -> Result<Self, ValidationError> {
        let long_url = long_url.into();
        let trimmed = long_url.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: LONG_URL_FIELD,
            });
        }
        Ok(Self {
            long_url: trimmed.to_owned(),
            name: None,
            alias: None,
            status: ShortlinkStatus::default(),
        })
    }

    pub fn with_name(mut self, name: ShortlinkName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_alias(mut self, alias: ShortlinkAlias) -> Self {
        self.alias = Some(alias);
        self
    }

    pub fn with_status(mut self, status: ShortlinkStatus) -> Self {
        self.status = status;
        self
    }

    pub fn long_url(&self) -> &str {
        &self.long_url
    }

    pub fn name(&self) -> Option<&ShortlinkName> {
        self.name.as_ref()
    }

    pub fn alias(&self) -> Option<&ShortlinkAlias> {
        self.alias.as_ref()
    }

    pub fn status(&self) -> ShortlinkStatus {
        self.status
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListShortlinksParams {
    pub id: Option<ShortlinkId>,
    pub start_date: Option<ApiDate>,
    pub end_date: Option<ApiDate>,
    pub limit: Option<u32>,
    pub offset: Option<i32>,
}
