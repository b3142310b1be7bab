//! Timestamp properties.

use cardinal_core::version::{CompatibilityMode, VCardVersion};
use cardinal_core::warning::WarningSink;
use chrono::{DateTime, NaiveDate, Utc};

use crate::element::Element;
use crate::jcard::{JCardDataType, JCardValue};
use crate::parameter::ParameterSet;

use super::PropertyCodec;

/// Child element tag for timestamps in the XML representation.
const TIMESTAMP_ELEMENT: &str = "timestamp";

/// A property holding a UTC timestamp (REV).
///
/// Accepts the basic `YYYYMMDDTHHMMSSZ` form as well as RFC 3339, and
/// re-emits the basic form in every representation. Malformed input
/// degrades to an empty value plus a diagnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimestampProperty {
    name: String,
    raw: String,
    timestamp: Option<DateTime<Utc>>,
}

impl TimestampProperty {
    /// Creates an empty property with the given name. The name is
    /// uppercased.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            raw: String::new(),
            timestamp: None,
        }
    }

    /// Creates a property holding the given timestamp.
    #[must_use]
    pub fn with_timestamp(name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            raw: format_timestamp(timestamp),
            timestamp: Some(timestamp),
        }
    }

    /// Returns the parsed timestamp, if the stored value parsed.
    #[must_use]
    pub const fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    fn store(&mut self, input: &str, warnings: &mut WarningSink) {
        match parse_timestamp(input) {
            Some(ts) => {
                self.timestamp = Some(ts);
                self.raw = format_timestamp(ts);
            }
            None => {
                warnings.push(format!(
                    "{}: could not parse timestamp \"{input}\", value is empty",
                    self.name
                ));
                self.clear();
            }
        }
    }

    fn clear(&mut self) {
        self.raw = String::new();
        self.timestamp = None;
    }
}

impl PropertyCodec for TimestampProperty {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &str {
        &self.raw
    }

    /// Replaces the stored value, normalizing it to the basic form when it
    /// parses. An unparseable value is kept verbatim with no timestamp.
    fn set_value(&mut self, value: String) {
        self.timestamp = parse_timestamp(&value);
        self.raw = match self.timestamp {
            Some(ts) => format_timestamp(ts),
            None => value,
        };
    }

    fn unmarshal_text(
        &mut self,
        _params: &ParameterSet,
        text: &str,
        _version: VCardVersion,
        warnings: &mut WarningSink,
        _mode: CompatibilityMode,
    ) {
        self.store(text, warnings);
    }

    fn marshal_xml(
        &self,
        element: &mut Element,
        _version: VCardVersion,
        _warnings: &mut WarningSink,
    ) {
        element.append_text_child(TIMESTAMP_ELEMENT, self.raw.as_str());
    }

    fn unmarshal_xml(
        &mut self,
        _params: &ParameterSet,
        element: &Element,
        _version: VCardVersion,
        warnings: &mut WarningSink,
        _mode: CompatibilityMode,
    ) {
        match element.find_child(TIMESTAMP_ELEMENT) {
            Some(child) => self.store(&child.text_content(), warnings),
            None if !element.text.is_empty() => self.store(&element.text, warnings),
            None => {
                warnings.push(format!(
                    "{}: no <timestamp> element found, value is empty",
                    self.name
                ));
                self.clear();
            }
        }
    }

    fn marshal_json(&self, _version: VCardVersion, _warnings: &mut WarningSink) -> JCardValue {
        JCardValue::single(JCardDataType::Timestamp, self.raw.as_str())
    }

    fn unmarshal_json(
        &mut self,
        _params: &ParameterSet,
        value: &JCardValue,
        _version: VCardVersion,
        warnings: &mut WarningSink,
    ) {
        let scalar = value.first_string().unwrap_or_default();
        self.store(&scalar, warnings);
    }

    fn unmarshal_html(&mut self, element: &Element, warnings: &mut WarningSink) {
        let text = element.text_content();
        self.store(&text, warnings);
    }
}

/// Parses the basic `YYYYMMDDTHHMMSSZ` form, then falls back to RFC 3339.
fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    if let Some(ts) = parse_basic_timestamp(input) {
        return Some(ts);
    }

    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_basic_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.strip_suffix('Z')?;

    if input.len() != 15 || !input.is_ascii() {
        return None;
    }

    if input.as_bytes().get(8) != Some(&b'T') {
        return None;
    }

    let year = input[0..4].parse::<i32>().ok()?;
    let month = input[4..6].parse::<u32>().ok()?;
    let day = input[6..8].parse::<u32>().ok()?;
    let hour = input[9..11].parse::<u32>().ok()?;
    let minute = input[11..13].parse::<u32>().ok()?;
    let second = input[13..15].parse::<u32>().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y%m%dT%H%M%SZ").to_string()
}
