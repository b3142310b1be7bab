//! Round trips that cross a representation boundary: codec plus the XML,
//! HTML, or JSON plumbing around it.

use cardinal_core::version::{CompatibilityMode, VCardVersion};
use cardinal_core::warning::WarningSink;
use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::codec::{PropertyCodec, RawProperty, TextProperty, TimestampProperty, UriProperty};
use crate::element::{html, xml};
use crate::jcard::{JCardDataType, JCardValue};
use crate::parameter::ParameterSet;

use super::fixtures::{
    ESCAPED_SEPARATOR_VALUE, HCARD_NESTED_NAME, HCARD_NOTE_WITH_BREAK, SEPARATOR_VALUE,
    XCARD_DIRECT_TEXT, XCARD_TWO_TEXT_CHILDREN,
};

fn unmarshal_xml_into<P: PropertyCodec>(property: &mut P, input: &str, warnings: &mut WarningSink) {
    let element = xml::parse_fragment(input).unwrap();
    property.unmarshal_xml(
        &ParameterSet::new(),
        &element,
        VCardVersion::V4,
        warnings,
        CompatibilityMode::Strict,
    );
}

#[test]
fn xcard_marshal_writes_and_parses_back() {
    let mut warnings = WarningSink::new();
    let property = RawProperty::with_value("X-SKILL", SEPARATOR_VALUE);

    let mut element = xml::parse_fragment("<x-skill/>").unwrap();
    property.marshal_xml(&mut element, VCardVersion::V4, &mut warnings);

    let fragment = xml::write_fragment(&element).unwrap();
    assert_eq!(fragment, "<x-skill><unknown>value;value</unknown></x-skill>");

    let mut restored = RawProperty::new("X-SKILL");
    unmarshal_xml_into(&mut restored, &fragment, &mut warnings);

    assert_eq!(restored.value(), SEPARATOR_VALUE);
    assert!(warnings.is_empty());
}

#[test]
fn xcard_first_child_wins() {
    let mut warnings = WarningSink::new();
    let mut property = RawProperty::new("X-SKILL");

    unmarshal_xml_into(&mut property, XCARD_TWO_TEXT_CHILDREN, &mut warnings);

    assert_eq!(property.value(), "first");
    assert!(warnings.is_empty());
}

#[test]
fn xcard_direct_text_is_the_fallback() {
    let mut warnings = WarningSink::new();
    let mut property = RawProperty::new("X-SKILL");

    unmarshal_xml_into(&mut property, XCARD_DIRECT_TEXT, &mut warnings);

    assert_eq!(property.value(), SEPARATOR_VALUE);
    assert!(warnings.is_empty());
}

#[test]
fn text_property_survives_a_text_wire_cycle() {
    let mut warnings = WarningSink::new();
    let original = TextProperty::with_value("NOTE", "semi; comma, line\nbreak");

    let wire = original.marshal_text(VCardVersion::V4, &mut warnings);
    assert_eq!(wire, r"semi\; comma\, line\nbreak");

    let mut restored = TextProperty::new("NOTE");
    restored.unmarshal_text(
        &ParameterSet::new(),
        &wire,
        VCardVersion::V4,
        &mut warnings,
        CompatibilityMode::Strict,
    );

    assert_eq!(restored, original);
    assert!(warnings.is_empty());
}

#[test]
fn jcard_document_cycle_preserves_the_logical_value() {
    let mut warnings = WarningSink::new();
    let property = TextProperty::with_value("NOTE", "semi; colon");

    let value = property.marshal_json(VCardVersion::V4, &mut warnings);

    let mut line = vec![json!("note"), json!({}), json!(value.data_type().as_str())];
    line.extend(value.to_json_values());
    let document = serde_json::to_string(&line).unwrap();
    assert_eq!(document, r#"["note",{},"text","semi; colon"]"#);

    let parsed: Vec<serde_json::Value> = serde_json::from_str(&document).unwrap();
    let data_type = JCardDataType::from_name(parsed[2].as_str().unwrap());
    let restored_value = JCardValue::from_json_values(data_type, &parsed[3..]);

    let mut restored = TextProperty::new("NOTE");
    restored.unmarshal_json(
        &ParameterSet::new(),
        &restored_value,
        VCardVersion::V4,
        &mut warnings,
    );

    assert_eq!(restored.value(), "semi; colon");
    assert!(warnings.is_empty());
}

#[test]
fn jcard_raw_cycle_reaches_a_fixed_point_after_one_pass() {
    // The generic codec unescapes on json marshal but escapes on json
    // unmarshal, so a raw value captured without escapes gains them on the
    // first cycle. Every cycle after that is stable.
    let mut warnings = WarningSink::new();
    let mut property = RawProperty::with_value("X-SKILL", SEPARATOR_VALUE);

    let json_cycle = |property: &mut RawProperty, warnings: &mut WarningSink| {
        let value = property.marshal_json(VCardVersion::V4, warnings);
        property.unmarshal_json(&ParameterSet::new(), &value, VCardVersion::V4, warnings);
    };

    json_cycle(&mut property, &mut warnings);
    assert_eq!(property.value(), ESCAPED_SEPARATOR_VALUE);

    json_cycle(&mut property, &mut warnings);
    assert_eq!(property.value(), ESCAPED_SEPARATOR_VALUE);
    assert!(warnings.is_empty());
}

#[test_log::test]
fn hcard_fragments_unmarshal_through_the_lenient_parser() {
    let mut warnings = WarningSink::new();

    let element = html::parse_fragment(HCARD_NOTE_WITH_BREAK).unwrap();
    let mut note = TextProperty::new("NOTE");
    note.unmarshal_html(&element, &mut warnings);
    assert_eq!(note.value(), "line one\nline two");

    let element = html::parse_fragment(HCARD_NESTED_NAME).unwrap();
    let mut name = TextProperty::new("FN");
    name.unmarshal_html(&element, &mut warnings);
    assert_eq!(name.value(), "John Doe");

    assert!(warnings.is_empty());
}

#[test]
fn codecs_dispatch_through_trait_objects() {
    let mut warnings = WarningSink::new();
    let revised = Utc.with_ymd_and_hms(1980, 6, 5, 13, 10, 20).unwrap();

    let properties: Vec<Box<dyn PropertyCodec>> = vec![
        Box::new(RawProperty::with_value("X-SKILL", "archery")),
        Box::new(TextProperty::with_value("NOTE", "semi; colon")),
        Box::new(UriProperty::with_value("URL", "https://example.com/")),
        Box::new(TimestampProperty::with_timestamp("REV", revised)),
    ];

    let lines: Vec<String> = properties
        .iter()
        .map(|property| {
            format!(
                "{}:{}",
                property.name(),
                property.marshal_text(VCardVersion::V4, &mut warnings)
            )
        })
        .collect();

    assert_eq!(
        lines,
        [
            "X-SKILL:archery",
            r"NOTE:semi\; colon",
            "URL:https://example.com/",
            "REV:19800605T131020Z",
        ]
    );
    assert!(warnings.is_empty());
}
