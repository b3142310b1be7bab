//! Lenient HTML fragment reading (hCard boundary).
//!
//! hCard markup in the wild is rarely well-formed XML, so this reader
//! tolerates what browsers tolerate: tag names are case-insensitive, void
//! elements need no end tag (and a stray `</br>` closes nothing), bare
//! ampersands are literal text, end tags close the nearest open element,
//! and elements still open at end of input are closed implicitly. `<br>`
//! becomes a newline in the enclosing element's text.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{CodecError, CodecResult};

use super::Element;

/// HTML elements that never have content or an end tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Parses an HTML fragment into an [`Element`] tree, returning the first
/// top-level element.
///
/// Attributes are dropped and tag names are lowercased. Unrecognized entity
/// references are kept verbatim rather than failing the parse.
///
/// ## Errors
/// Returns an error if the fragment contains no element at all, or if the
/// input is broken beyond what lenient parsing can absorb (for example a
/// `<` that never closes).
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_fragment(input: &str) -> CodecResult<Element> {
    let mut reader = Reader::from_str(input);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.allow_dangling_amp = true;

    let mut roots: Vec<Element> = Vec::new();
    let mut stack: Vec<Element> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let tag = tag_name(start.local_name().as_ref())?;
                if tag == "br" {
                    push_text(&mut stack, "\n");
                } else if VOID_TAGS.contains(&tag.as_str()) {
                    attach(&mut stack, &mut roots, Element::new(tag));
                } else {
                    stack.push(Element::new(tag));
                }
            }
            Ok(Event::Empty(start)) => {
                let tag = tag_name(start.local_name().as_ref())?;
                if tag == "br" {
                    push_text(&mut stack, "\n");
                } else {
                    attach(&mut stack, &mut roots, Element::new(tag));
                }
            }
            Ok(Event::End(end)) => {
                // An end tag closes the nearest open element; unmatched end
                // tags are ignored. Void elements never reach the stack, so
                // their explicit end tags (XHTML's `</br>`) close nothing.
                let tag = tag_name(end.local_name().as_ref())?;
                if !VOID_TAGS.contains(&tag.as_str()) && let Some(element) = stack.pop() {
                    attach(&mut stack, &mut roots, element);
                }
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
                if let Some(resolved) = resolve_reference(name) {
                    let mut buffer = [0u8; 4];
                    push_text(&mut stack, resolved.encode_utf8(&mut buffer));
                } else {
                    tracing::debug!(entity = name, "unrecognized entity reference kept verbatim");
                    push_text(&mut stack, &format!("&{name};"));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(CodecError::Html(e.to_string())),
        }
    }

    while let Some(element) = stack.pop() {
        attach(&mut stack, &mut roots, element);
    }

    roots
        .into_iter()
        .next()
        .ok_or_else(|| CodecError::Html("no element found".to_string()))
}

fn tag_name(name: &[u8]) -> CodecResult<String> {
    Ok(std::str::from_utf8(name)?.to_ascii_lowercase())
}

fn push_text(stack: &mut [Element], text: &str) {
    if let Some(current) = stack.last_mut() {
        current.text.push_str(text);
    }
}

fn attach(stack: &mut [Element], roots: &mut Vec<Element>, element: Element) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else {
        roots.push(element);
    }
}

fn resolve_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => super::resolve_char_ref(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_tags_and_drops_attributes() {
        let element = parse_fragment(r#"<DIV CLASS="note">value;value</DIV>"#).unwrap();

        assert_eq!(element.tag, "div");
        assert_eq!(element.text, "value;value");
        assert!(element.children.is_empty());
    }

    #[test]
    fn br_becomes_a_newline() {
        let element = parse_fragment("<div>line one<br>line two</div>").unwrap();
        assert_eq!(element.text, "line one\nline two");

        let element = parse_fragment("<div>line one<br/>line two</div>").unwrap();
        assert_eq!(element.text, "line one\nline two");
    }

    #[test]
    fn nested_markup_contributes_to_text_content() {
        let element = parse_fragment(r#"<span class="fn">John <b>Doe</b></span>"#).unwrap();

        assert_eq!(element.tag, "span");
        assert_eq!(element.text_content(), "John Doe");
    }

    #[test]
    fn void_elements_need_no_end_tag() {
        let element = parse_fragment(r#"<div>before<img src="x.png">after</div>"#).unwrap();

        assert_eq!(element.text, "beforeafter");
        assert_eq!(element.children.len(), 1);
        assert_eq!(element.children[0].tag, "img");
    }

    #[test]
    fn explicit_void_end_tags_close_nothing() {
        let element = parse_fragment("<div>line one<br></br>line two</div>").unwrap();

        assert_eq!(element.tag, "div");
        assert_eq!(element.text, "line one\nline two");
    }

    #[test]
    fn tolerates_misnested_end_tags() {
        let element = parse_fragment("<b><i>bold italic</b></i>").unwrap();

        assert_eq!(element.tag, "b");
        assert_eq!(element.text_content(), "bold italic");
    }

    #[test]
    fn closes_open_elements_at_end_of_input() {
        let element = parse_fragment("<div><span>dangling").unwrap();

        assert_eq!(element.tag, "div");
        assert_eq!(element.text_content(), "dangling");
    }

    #[test]
    fn ignores_unmatched_end_tags() {
        let element = parse_fragment("</p><div>value</div>").unwrap();

        assert_eq!(element.tag, "div");
        assert_eq!(element.text, "value");
    }

    #[test]
    fn resolves_common_entities() {
        let element = parse_fragment("<div>a&nbsp;b &amp; c &#233;</div>").unwrap();
        assert_eq!(element.text, "a\u{a0}b & c é");
    }

    #[test]
    fn keeps_unrecognized_entities_verbatim() {
        let element = parse_fragment("<div>x&unknown;y</div>").unwrap();
        assert_eq!(element.text, "x&unknown;y");
    }

    #[test]
    fn bare_ampersands_are_literal_text() {
        let element = parse_fragment("<div>AT&T Research</div>").unwrap();
        assert_eq!(element.text, "AT&T Research");
    }

    #[test]
    fn returns_the_first_of_several_roots() {
        let element = parse_fragment("<div>first</div><div>second</div>").unwrap();
        assert_eq!(element.text, "first");
    }

    #[test]
    fn skips_doctype_and_comments() {
        let element = parse_fragment("<!DOCTYPE html><!-- note --><div>value</div>").unwrap();
        assert_eq!(element.text, "value");
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(parse_fragment(""), Err(CodecError::Html(_))));
        assert!(matches!(parse_fragment("   "), Err(CodecError::Html(_))));
    }
}
