//! Error types for the codec boundary.
//!
//! Marshal and unmarshal operations themselves are total; errors only arise
//! at the plumbing around them, such as reading an XML or HTML fragment into
//! an element tree.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("XML error: {0}")]
    Xml(String),

    #[error("HTML error: {0}")]
    Html(String),

    #[error("Encoding error: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error(transparent)]
    CoreError(#[from] cardinal_core::error::CoreError),
}

impl From<quick_xml::Error> for CodecError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err.to_string())
    }
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;
