use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidMsisdn { input: String },
    InvalidContactStatus { input: String },
    InvalidShortlinkStatus { input: String },
    InvalidDate { input: String },
    NameTooLong { max: usize, actual: usize },
    AliasTooLong { max: usize, actual: usize },
    AliasContainsWhitespace,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidMsisdn { input } => {
                write!(f, "invalid msisdn: {input} (expected digits only)")
            }
            Self::InvalidContactStatus { input } => {
                write!(
                    f,
                    "invalid contact status: {input} (expected SUBSCRIBED, INVITED, CONFIRMED or CANCELLED)"
                )
            }
            Self::InvalidShortlinkStatus { input } => {
                write!(
                    f,
                    "invalid shortlink status: {input} (expected ACTIVE or INACTIVE)"
                )
            }
            Self::InvalidDate { input } => {
                write!(
                    f,
                    "invalid date: {input} (expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS)"
                )
            }
            Self::NameTooLong { max, actual } => {
                write!(f, "name too long: {actual} characters (max {max})")
            }
            Self::AliasTooLong { max, actual } => {
                write!(f, "alias too long: {actual} characters (max {max})")
            }
            Self::AliasContainsWhitespace => write!(f, "alias must not contain whitespace"),
        }
    }
}

impl std::error::Error for ValidationError {}
