//! URI reference properties.

use cardinal_core::version::{CompatibilityMode, VCardVersion};
use cardinal_core::warning::WarningSink;

use crate::element::Element;
use crate::jcard::{JCardDataType, JCardValue};
use crate::parameter::ParameterSet;

use super::PropertyCodec;

/// Child element tag for URI values in the XML representation.
const URI_ELEMENT: &str = "uri";

/// A property holding a URI reference (URL, SOURCE, MEMBER, ...).
///
/// URIs are exempt from text escaping, so the value moves verbatim through
/// every representation; only the XML element tag and the JSON data type
/// differ from the generic codec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UriProperty {
    name: String,
    value: String,
}

impl UriProperty {
    /// Creates an empty property with the given name. The name is
    /// uppercased.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: String::new(),
        }
    }

    /// Creates a property holding the given URI.
    #[must_use]
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: value.into(),
        }
    }
}

impl PropertyCodec for UriProperty {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }

    fn marshal_xml(
        &self,
        element: &mut Element,
        _version: VCardVersion,
        _warnings: &mut WarningSink,
    ) {
        element.append_text_child(URI_ELEMENT, self.value.as_str());
    }

    fn unmarshal_xml(
        &mut self,
        _params: &ParameterSet,
        element: &Element,
        _version: VCardVersion,
        warnings: &mut WarningSink,
        _mode: CompatibilityMode,
    ) {
        match element.find_child(URI_ELEMENT) {
            Some(child) => self.value = child.text_content(),
            None if !element.text.is_empty() => self.value = element.text.clone(),
            None => {
                warnings.push(format!(
                    "{}: no <uri> element found, value is empty",
                    self.name
                ));
                self.value = String::new();
            }
        }
    }

    fn marshal_json(&self, _version: VCardVersion, _warnings: &mut WarningSink) -> JCardValue {
        JCardValue::single(JCardDataType::Uri, self.value.as_str())
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
