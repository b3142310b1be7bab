//! Walks one property value through all four wire representations.
//!
//! Run with: `cargo run --package cardinal-codec --example raw_property_example`

use cardinal_codec::element::{html, xml};
use cardinal_codec::{
    CodecResult, CompatibilityMode, ParameterSet, PropertyCodec, RawProperty, VCardVersion,
    WarningSink,
};
use serde_json::json;

fn main() -> CodecResult<()> {
    let mut warnings = WarningSink::new();
    let params = ParameterSet::new();

    // Plain text, as the property appears after "X-SKILL:" on a vCard line.
    let mut property = RawProperty::new("X-SKILL");
    property.unmarshal_text(
        &params,
        r"archery\;level 3",
        VCardVersion::V4,
        &mut warnings,
        CompatibilityMode::Strict,
    );
    println!("text value:  {}", property.value());

    // xCard: marshal into the property element, then write the fragment.
    let mut element = xml::parse_fragment("<x-skill/>")?;
    property.marshal_xml(&mut element, VCardVersion::V4, &mut warnings);
    let fragment = xml::write_fragment(&element)?;
    println!("xCard:       {fragment}");

    // jCard: the full property line is [name, parameters, type, value].
    let value = property.marshal_json(VCardVersion::V4, &mut warnings);
    let mut line = vec![
        json!(property.name().to_lowercase()),
        json!({}),
        json!(value.data_type().as_str()),
    ];
    line.extend(value.to_json_values());
    println!("jCard:       {}", serde_json::Value::Array(line));

    // hCard: read-only, parsed leniently.
    let hcard = html::parse_fragment(r#"<div class="x-skill">archery<br>level 3</div>"#)?;
    let mut from_html = RawProperty::new("X-SKILL");
    from_html.unmarshal_html(&hcard, &mut warnings);
    println!("hCard value: {:?}", from_html.value());

    for warning in &warnings {
        println!("warning:     {warning}");
    }

    Ok(())
}
