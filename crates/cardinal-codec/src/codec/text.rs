//! Free-form text properties.

use cardinal_core::version::{CompatibilityMode, VCardVersion};
use cardinal_core::warning::WarningSink;

use crate::element::Element;
use crate::escape::{escape_text, unescape_text};
use crate::jcard::{JCardDataType, JCardValue};
use crate::parameter::ParameterSet;

use super::PropertyCodec;

/// Child element tag for text values in the XML representation.
const TEXT_ELEMENT: &str = "text";

/// A property holding free-form text (NOTE, TITLE, FN, ...).
///
/// Unlike [`RawProperty`](super::RawProperty), the stored value is the
/// logical text: escapes are added on text marshal and removed on text
/// unmarshal, and the JSON representation carries the value as-is in both
/// directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextProperty {
    name: String,
    value: String,
}

impl TextProperty {
    /// Creates an empty property with the given name. The name is
    /// uppercased.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: String::new(),
        }
    }

    /// Creates a property holding the given logical text.
    #[must_use]
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: value.into(),
        }
    }
}

impl PropertyCodec for TextProperty {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }

    fn marshal_text(&self, version: VCardVersion, _warnings: &mut WarningSink) -> String {
        escape_text(&self.value, version)
    }

    fn unmarshal_text(
        &mut self,
        _params: &ParameterSet,
        text: &str,
        _version: VCardVersion,
        _warnings: &mut WarningSink,
        _mode: CompatibilityMode,
    ) {
        self.value = unescape_text(text);
    }

    fn marshal_xml(
        &self,
        element: &mut Element,
        _version: VCardVersion,
        _warnings: &mut WarningSink,
    ) {
        element.append_text_child(TEXT_ELEMENT, self.value.as_str());
    }

    fn unmarshal_xml(
        &mut self,
        _params: &ParameterSet,
        element: &Element,
        _version: VCardVersion,
        warnings: &mut WarningSink,
        _mode: CompatibilityMode,
    ) {
        match element.find_child(TEXT_ELEMENT) {
            Some(child) => self.value = child.text_content(),
            None => {
                warnings.push(format!(
                    "{}: no <text> element found, value is empty",
                    self.name
                ));
                self.value = String::new();
            }
        }
    }

    fn marshal_json(&self, _version: VCardVersion, _warnings: &mut WarningSink) -> JCardValue {
        JCardValue::single(JCardDataType::Text, self.value.as_str())
    }

    fn unmarshal_json(
        &mut self,
        _params: &ParameterSet,
        value: &JCardValue,
        _version: VCardVersion,
        _warnings: &mut WarningSink,
    ) {
        self.value = value.first_string().unwrap_or_default();
    }
}
