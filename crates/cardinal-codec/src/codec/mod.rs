//! Property codecs: one stored value, four wire representations.
//!
//! [`PropertyCodec`] is the contract every property kind satisfies. Its
//! default methods implement the generic behavior used for extension and
//! unrecognized properties; typed kinds such as [`TextProperty`] override
//! the representations they understand. Unmarshal operations are total:
//! missing or malformed data degrades to an empty value plus a
//! [`WarningSink`] diagnostic, never a failure.

mod raw;
mod text;
mod timestamp;
mod uri;

#[cfg(test)]
mod tests;

pub use raw::RawProperty;
pub use text::TextProperty;
pub use timestamp::TimestampProperty;
pub use uri::UriProperty;

use cardinal_core::version::{CompatibilityMode, VCardVersion};
use cardinal_core::warning::WarningSink;

use crate::element::Element;
use crate::escape::{escape_text, unescape_text};
use crate::jcard::{JCardDataType, JCardValue};
use crate::parameter::ParameterSet;

/// Child element tag used by the generic XML marshal, for properties with
/// no representation-specific element name.
pub const UNKNOWN_ELEMENT: &str = "unknown";

/// The marshal and unmarshal contract shared by every property kind.
///
/// A codec stores its value in plain-text representation form and converts
/// it to and from the text, XML (xCard), JSON (jCard), and HTML (hCard)
/// representations. The default methods carry the generic semantics; a
/// typed property overrides only the parts that differ.
pub trait PropertyCodec {
    /// The property name, uppercase (`NOTE`, `X-SKILL`, ...).
    fn name(&self) -> &str;

    /// The stored value, in plain-text representation form.
    fn value(&self) -> &str;

    /// Replaces the stored value.
    fn set_value(&mut self, value: String);

    /// Serializes the value for the plain-text representation.
    ///
    /// The generic codec emits the stored value verbatim: it is already in
    /// text form, and re-escaping it would double the escapes.
    fn marshal_text(&self, _version: VCardVersion, _warnings: &mut WarningSink) -> String {
        self.value().to_string()
    }

    /// Reads a plain-text value.
    ///
    /// The generic codec stores the text verbatim, escape sequences
    /// included.
    fn unmarshal_text(
        &mut self,
        _params: &ParameterSet,
        text: &str,
        _version: VCardVersion,
        _warnings: &mut WarningSink,
        _mode: CompatibilityMode,
    ) {
        self.set_value(text.to_string());
    }

    /// Serializes the value into `element`, the property's XML element.
    ///
    /// The generic codec appends a single [`UNKNOWN_ELEMENT`] child holding
    /// the stored value.
    fn marshal_xml(
        &self,
        element: &mut Element,
        _version: VCardVersion,
        _warnings: &mut WarningSink,
    ) {
        element.append_text_child(UNKNOWN_ELEMENT, self.value());
    }

    /// Reads the value from the property's XML element.
    ///
    /// The generic codec takes the text content of the first child element
    /// whatever its tag; with no children it falls back to the element's
    /// own text, which may be empty.
    fn unmarshal_xml(
        &mut self,
        _params: &ParameterSet,
        element: &Element,
        _version: VCardVersion,
        _warnings: &mut WarningSink,
        _mode: CompatibilityMode,
    ) {
        let value = match element.first_child() {
            Some(child) => child.text_content(),
            None => element.text.clone(),
        };
        self.set_value(value);
    }

    /// Serializes the value for the JSON representation.
    ///
    /// The generic codec produces a single non-structured text scalar with
    /// the escaping removed, since jCard carries raw values.
    fn marshal_json(&self, _version: VCardVersion, _warnings: &mut WarningSink) -> JCardValue {
        JCardValue::single(JCardDataType::Text, unescape_text(self.value()))
    }

    /// Reads the value from the JSON representation.
    ///
    /// The generic codec takes the first scalar of the first group (the
    /// empty string when there is none) and escapes it for storage.
    fn unmarshal_json(
        &mut self,
        _params: &ParameterSet,
        value: &JCardValue,
        version: VCardVersion,
        _warnings: &mut WarningSink,
    ) {
        let scalar = value.first_string().unwrap_or_default();
        self.set_value(escape_text(&scalar, version));
    }

    /// Reads the value from an hCard element.
    ///
    /// The generic codec stores the element's text content verbatim. There
    /// is no HTML marshal; hCard is read-only.
    fn unmarshal_html(&mut self, element: &Element, _warnings: &mut WarningSink) {
        self.set_value(element.text_content());
    }
}
