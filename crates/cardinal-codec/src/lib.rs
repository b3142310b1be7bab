//! Marshaling codecs for vCard properties across their four wire
//! representations: plain text (RFC 6350), xCard XML (RFC 6351), jCard JSON
//! (RFC 7095), and the hCard microformat.
//!
//! Every property kind implements [`PropertyCodec`]; unrecognized and
//! extension properties fall back to [`RawProperty`], whose generic
//! behavior works for any property. Unmarshal operations never fail:
//! questionable input degrades to an empty value plus a [`WarningSink`]
//! diagnostic.
//!
//! ## Usage
//!
//! ```rust
//! use cardinal_codec::{
//!     CompatibilityMode, ParameterSet, PropertyCodec, RawProperty, VCardVersion, WarningSink,
//! };
//!
//! let mut warnings = WarningSink::new();
//! let mut property = RawProperty::new("X-SKILL");
//!
//! property.unmarshal_text(
//!     &ParameterSet::new(),
//!     "archery;level 3",
//!     VCardVersion::V4,
//!     &mut warnings,
//!     CompatibilityMode::Strict,
//! );
//!
//! assert_eq!(property.value(), "archery;level 3");
//! assert!(warnings.is_empty());
//! ```

pub mod codec;
pub mod element;
pub mod error;
pub mod escape;
pub mod jcard;
pub mod parameter;

pub use cardinal_core::error::{CoreError, CoreResult};
pub use cardinal_core::version::{CompatibilityMode, VCardVersion};
pub use cardinal_core::warning::WarningSink;

pub use codec::{PropertyCodec, RawProperty, TextProperty, TimestampProperty, UriProperty};
pub use element::Element;
pub use error::{CodecError, CodecResult};
pub use jcard::{JCardDataType, JCardScalar, JCardValue};
pub use parameter::{Parameter, ParameterSet};
