//! Backslash escaping for the plain-text vCard representation.
//!
//! vCard 2.1 only defines an escape for the semicolon; 3.0 and 4.0 also
//! escape commas, newlines, and the backslash itself. Unescaping is
//! version-independent and accepts every sequence any version can produce.

use cardinal_core::version::VCardVersion;

/// Escapes a raw value for the plain-text representation.
///
/// Under [`VCardVersion::V2`] only `;` is escaped; later versions escape
/// `;`, `,`, newline, and `\` as well. Pairs with [`unescape_text`] so that
/// `unescape_text(&escape_text(raw, version)) == raw`, with one 2.1 caveat:
/// because 2.1 leaves backslashes alone, a raw value that already contains a
/// backslash followed by `n`, `N`, `,`, `;`, or `\` will not survive the
/// round trip under [`VCardVersion::V2`].
#[must_use]
pub fn escape_text(raw: &str, version: VCardVersion) -> String {
    let mut result = String::with_capacity(raw.len());

    for c in raw.chars() {
        match c {
            ';' => result.push_str("\\;"),
            ',' if version != VCardVersion::V2 => result.push_str("\\,"),
            '\n' if version != VCardVersion::V2 => result.push_str("\\n"),
            '\\' if version != VCardVersion::V2 => result.push_str("\\\\"),
            _ => result.push(c),
        }
    }

    result
}

/// Removes backslash escaping from a plain-text value.
///
/// `\n` and `\N` become a newline, `\,`, `\;`, and `\\` become the escaped
/// character. A backslash followed by anything else (or at the end of the
/// value) is kept as-is.
#[must_use]
pub fn unescape_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    result.push('\n');
                    chars.next();
                }
                Some(',') => {
                    result.push(',');
                    chars.next();
                }
                Some(';') => {
                    result.push(';');
                    chars.next();
                }
                Some('\\') => {
                    result.push('\\');
                    chars.next();
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}
