//! Strict XML fragment reading and writing (xCard boundary).

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::{CodecError, CodecResult};

use super::Element;

/// Parses an XML fragment into an [`Element`] tree.
///
/// Namespace prefixes are stripped from tag names and attributes are
/// dropped. Whitespace-only text nodes are dropped too, so pretty-printed
/// input does not leak indentation into values; any other text is kept
/// verbatim.
///
/// ## Errors
/// Returns an error for ill-formed XML: mismatched or unclosed tags, more
/// than one top-level element, no element at all, or an entity reference
/// that is neither predefined nor numeric.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_fragment(input: &str) -> CodecResult<Element> {
    let mut reader = Reader::from_str(input);

    let mut root: Option<Element> = None;
    let mut stack: Vec<Element> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => stack.push(element_from_start(&start)?),
            Ok(Event::Empty(start)) => {
                let element = element_from_start(&start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                let Some(element) = stack.pop() else {
                    return Err(CodecError::Xml("unmatched end tag".to_string()));
                };
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(text)) => {
                let text = std::str::from_utf8(text.as_ref())?;
                if !text.chars().all(char::is_whitespace) {
                    push_text(&mut stack, text);
                }
            }
            Ok(Event::CData(data)) => push_text(&mut stack, std::str::from_utf8(data.as_ref())?),
            Ok(Event::GeneralRef(reference)) => {
                let name = std::str::from_utf8(reference.as_ref())?;
                let Some(resolved) = resolve_reference(name) else {
                    return Err(CodecError::Xml(format!(
                        "unresolved entity reference: &{name};"
                    )));
                };
                let mut buffer = [0u8; 4];
                push_text(&mut stack, resolved.encode_utf8(&mut buffer));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(CodecError::Xml(e.to_string())),
        }
    }

    if !stack.is_empty() {
        return Err(CodecError::Xml("unclosed element".to_string()));
    }

    root.ok_or_else(|| CodecError::Xml("no element found".to_string()))
}

/// Serializes an [`Element`] tree back to an XML fragment.
///
/// An element with no text and no children is written self-closing. Text is
/// written before child elements, mirroring how [`parse_fragment`] collects
/// it.
///
/// ## Errors
/// Returns an error if the underlying writer fails.
pub fn write_fragment(element: &Element) -> CodecResult<String> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, element)?;

    let bytes = writer.into_inner();
    String::from_utf8(bytes).map_err(|e| CodecError::Encoding(e.utf8_error()))
}

fn element_from_start(start: &BytesStart<'_>) -> CodecResult<Element> {
    let tag = std::str::from_utf8(start.local_name().as_ref())?.to_string();
    Ok(Element::new(tag))
}

fn push_text(stack: &mut [Element], text: &str) {
    if let Some(current) = stack.last_mut() {
        current.text.push_str(text);
    }
}

fn attach(
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
    element: Element,
) -> CodecResult<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_some() {
        return Err(CodecError::Xml("multiple root elements".to_string()));
    } else {
        *root = Some(element);
    }
    Ok(())
}

fn resolve_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => super::resolve_char_ref(name),
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), quick_xml::Error> {
    if element.text.is_empty() && element.children.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(element.tag.as_str())))?;
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new(element.tag.as_str())))?;

    if !element.text.is_empty() {
        writer.write_event(Event::Text(BytesText::new(element.text.as_str())))?;
    }

    for child in &element.children {
        write_element(writer, child)?;
    }

    writer.write_event(Event::End(BytesEnd::new(element.tag.as_str())))?;

    Ok(())
}
