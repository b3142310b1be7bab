use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The data type slot of a jCard property, from RFC 7095 section 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JCardDataType {
    Text,
    Uri,
    Date,
    Time,
    DateTime,
    DateAndOrTime,
    Timestamp,
    Boolean,
    Integer,
    Float,
    UtcOffset,
    LanguageTag,
    /// Used when the property carries no VALUE parameter and its type is not
    /// known, per RFC 7095 section 5 ("unknown").
    Unknown,
}

impl JCardDataType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Uri => "uri",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "date-time",
            Self::DateAndOrTime => "date-and-or-time",
            Self::Timestamp => "timestamp",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::UtcOffset => "utc-offset",
            Self::LanguageTag => "language-tag",
            Self::Unknown => "unknown",
        }
    }

    /// Maps a data type name to its variant. Unrecognized names map to
    /// [`JCardDataType::Unknown`] rather than failing; jCard consumers are
    /// expected to pass unknown types through.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "text" => Self::Text,
            "uri" => Self::Uri,
            "date" => Self::Date,
            "time" => Self::Time,
            "date-time" => Self::DateTime,
            "date-and-or-time" => Self::DateAndOrTime,
            "timestamp" => Self::Timestamp,
            "boolean" => Self::Boolean,
            "integer" => Self::Integer,
            "float" => Self::Float,
            "utc-offset" => Self::UtcOffset,
            "language-tag" => Self::LanguageTag,
            _ => Self::Unknown,
        }
    }
}

impl Display for JCardDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
