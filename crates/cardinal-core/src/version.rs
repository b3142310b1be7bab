//! vCard version and compatibility policy.
//!
//! Every marshal and unmarshal operation is parameterized by the
//! [`VCardVersion`] being targeted, and unmarshal operations additionally by
//! a [`CompatibilityMode`] that callers can relax for real-world data.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// XML namespace for vCard 4.0 documents, from RFC 6351.
pub const XCARD_NAMESPACE: &str = "urn:ietf:params:xml:ns:vcard-4.0";

/// A vCard specification version.
///
/// Escaping rules and representation support differ per version: 2.1 only
/// recognizes backslash-escaped semicolons, while 3.0 and 4.0 escape commas,
/// newlines, and backslashes as well. The XML and JSON representations are
/// only defined for 4.0, but codecs accept any version and leave enforcement
/// to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VCardVersion {
    /// vCard 2.1.
    #[serde(rename = "2.1")]
    V2,
    /// vCard 3.0 (RFC 2426).
    #[serde(rename = "3.0")]
    V3,
    /// vCard 4.0 (RFC 6350).
    #[serde(rename = "4.0")]
    V4,
}

impl VCardVersion {
    /// Returns the version number as it appears in a VERSION property.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V2 => "2.1",
            Self::V3 => "3.0",
            Self::V4 => "4.0",
        }
    }

    /// Returns the XML namespace for this version, if it has an XML
    /// representation.
    #[must_use]
    pub const fn xml_namespace(self) -> Option<&'static str> {
        match self {
            Self::V2 | Self::V3 => None,
            Self::V4 => Some(XCARD_NAMESPACE),
        }
    }
}

impl Display for VCardVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VCardVersion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2.1" => Ok(Self::V2),
            "3.0" => Ok(Self::V3),
            "4.0" => Ok(Self::V4),
            other => Err(CoreError::UnsupportedVersion(other.to_string())),
        }
    }
}

/// How strictly unmarshal operations treat questionable input.
///
/// Codecs never fail on bad data either way; the mode decides how much gets
/// repaired silently versus reported through the warning sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityMode {
    /// Follow the RFCs as written.
    #[default]
    Strict,
    /// Accept common deviations produced by legacy exporters.
    Lenient,
}

impl CompatibilityMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }

    #[must_use]
    pub const fn is_lenient(self) -> bool {
        matches!(self, Self::Lenient)
    }
}

impl Display for CompatibilityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
