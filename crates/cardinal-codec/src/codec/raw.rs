//! The generic property codec.

use super::PropertyCodec;

/// A property with no representation-specific behavior.
///
/// Used for extension (`X-`) and unrecognized properties: the value is
/// stored exactly as it appears on the plain-text wire, and every
/// representation uses the generic [`PropertyCodec`] defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProperty {
    name: String,
    value: String,
}

impl RawProperty {
    /// Creates an empty property with the given name. The name is
    /// uppercased.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: String::new(),
        }
    }

    /// Creates a property holding the given wire value.
    #[must_use]
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: value.into(),
        }
    }
}

impl PropertyCodec for RawProperty {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }
}
