use std::fmt::Display;

use serde_json::Value;

use super::JCardDataType;

/// One scalar in a jCard value slot.
///
/// jCard allows JSON strings, numbers, booleans, and null in value position.
/// Numbers are split into integer and float the way `serde_json` reports
/// them.
#[derive(Debug, Clone, PartialEq)]
pub enum JCardScalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl JCardScalar {
    /// Returns the text content, if this scalar is a string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Integer(_) | Self::Float(_) | Self::Boolean(_) | Self::Null => None,
        }
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(s) => Value::String(s.clone()),
            Self::Integer(i) => Value::from(*i),
            Self::Float(n) => Value::from(*n),
            Self::Boolean(b) => Value::Bool(*b),
            Self::Null => Value::Null,
        }
    }

    /// Converts a JSON value into a scalar. Arrays and objects are not
    /// scalars and map to [`JCardScalar::Null`].
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s.clone()),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Self::Float(f)
                } else {
                    Self::Null
                }
            }
            Value::Bool(b) => Self::Boolean(*b),
            Value::Null | Value::Array(_) | Value::Object(_) => Self::Null,
        }
    }
}

impl Display for JCardScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => Ok(()),
        }
    }
}

impl From<String> for JCardScalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for JCardScalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for JCardScalar {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for JCardScalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for JCardScalar {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// The typed value of one jCard property.
///
/// Scalars are arranged in groups: a non-structured value has one scalar per
/// group (multi-valued properties like NICKNAME have several groups), while
/// a structured value like N keeps all its component groups inside a single
/// JSON array.
#[derive(Debug, Clone, PartialEq)]
pub struct JCardValue {
    data_type: JCardDataType,
    structured: bool,
    values: Vec<Vec<JCardScalar>>,
}

impl JCardValue {
    /// Creates a non-structured value holding a single scalar.
    #[must_use]
    pub fn single(data_type: JCardDataType, scalar: impl Into<JCardScalar>) -> Self {
        Self {
            data_type,
            structured: false,
            values: vec![vec![scalar.into()]],
        }
    }

    /// Creates a non-structured multi-valued value, one scalar per value.
    #[must_use]
    pub fn multi(data_type: JCardDataType, scalars: Vec<JCardScalar>) -> Self {
        Self {
            data_type,
            structured: false,
            values: scalars.into_iter().map(|scalar| vec![scalar]).collect(),
        }
    }

    /// Creates a structured value from its component groups.
    #[must_use]
    pub fn structured(data_type: JCardDataType, groups: Vec<Vec<JCardScalar>>) -> Self {
        Self {
            data_type,
            structured: true,
            values: groups,
        }
    }

    #[must_use]
    pub const fn data_type(&self) -> JCardDataType {
        self.data_type
    }

    #[must_use]
    pub const fn is_structured(&self) -> bool {
        self.structured
    }

    #[must_use]
    pub fn values(&self) -> &[Vec<JCardScalar>] {
        &self.values
    }

    /// Returns the first scalar of the first group, if any.
    #[must_use]
    pub fn first_scalar(&self) -> Option<&JCardScalar> {
        self.values.first()?.first()
    }

    /// Returns the first scalar rendered as text. `None` when the value
    /// holds no scalar at all; a null scalar renders as the empty string.
    #[must_use]
    pub fn first_string(&self) -> Option<String> {
        self.first_scalar().map(ToString::to_string)
    }

    /// Renders the value slots as they appear in a jCard property array
    /// (everything after the data type).
    #[must_use]
    pub fn to_json_values(&self) -> Vec<Value> {
        if self.structured {
            vec![Value::Array(
                self.values.iter().map(|group| group_to_json(group)).collect(),
            )]
        } else {
            self.values.iter().map(|group| group_to_json(group)).collect()
        }
    }

    /// Reads the value slots of a jCard property array.
    ///
    /// A single array slot means a structured value; anything else is read
    /// as one scalar per slot. Inside a structured value an empty string
    /// denotes an empty component group. An empty slice produces a value
    /// with no scalars.
    #[must_use]
    pub fn from_json_values(data_type: JCardDataType, values: &[Value]) -> Self {
        match values {
            [Value::Array(components)] => Self {
                data_type,
                structured: true,
                values: components.iter().map(component_to_group).collect(),
            },
            _ => Self {
                data_type,
                structured: false,
                values: values
                    .iter()
                    .map(|value| vec![JCardScalar::from_json(value)])
                    .collect(),
            },
        }
    }
}

fn group_to_json(group: &[JCardScalar]) -> Value {
    match group {
        [] => Value::String(String::new()),
        [scalar] => scalar.to_json(),
        scalars => Value::Array(scalars.iter().map(JCardScalar::to_json).collect()),
    }
}

fn component_to_group(component: &Value) -> Vec<JCardScalar> {
    match component {
        Value::Array(scalars) => scalars.iter().map(JCardScalar::from_json).collect(),
        // "" is the wire form of an empty component group.
        Value::String(text) if text.is_empty() => Vec::new(),
        scalar => vec![JCardScalar::from_json(scalar)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_value_renders_one_slot() {
        let value = JCardValue::single(JCardDataType::Text, "value;value");

        assert_eq!(value.data_type(), JCardDataType::Text);
        assert!(!value.is_structured());
        assert_eq!(value.to_json_values(), vec![json!("value;value")]);
        assert_eq!(value.first_string(), Some("value;value".to_string()));
    }

    #[test]
    fn multi_value_renders_one_slot_per_scalar() {
        let value = JCardValue::multi(
            JCardDataType::Text,
            vec!["Johnny".into(), "Joey".into()],
        );

        assert_eq!(value.to_json_values(), vec![json!("Johnny"), json!("Joey")]);
    }

    #[test]
    fn structured_value_renders_a_single_array_slot() {
        // The N property from RFC 7095 section 3.3.1.3.
        let value = JCardValue::structured(
            JCardDataType::Text,
            vec![
                vec!["Public".into()],
                vec!["John".into()],
                vec![],
                vec![],
                vec!["Dr.".into(), "Esq.".into()],
            ],
        );

        assert_eq!(
            value.to_json_values(),
            vec![json!(["Public", "John", "", "", ["Dr.", "Esq."]])]
        );
    }

    #[test]
    fn from_json_detects_structured_values() {
        let slots = [json!(["Public", "John", "", "", ["Dr.", "Esq."]])];
        let value = JCardValue::from_json_values(JCardDataType::Text, &slots);

        assert!(value.is_structured());
        assert_eq!(value.values().len(), 5);
        assert_eq!(value.values()[2], vec![]);
        assert_eq!(
            value.values()[4],
            vec![JCardScalar::Text("Dr.".into()), JCardScalar::Text("Esq.".into())]
        );
        assert_eq!(value.first_string(), Some("Public".to_string()));
    }

    #[test]
    fn structured_values_survive_a_json_cycle() {
        let original = JCardValue::structured(
            JCardDataType::Text,
            vec![
                vec!["Public".into()],
                vec!["John".into()],
                vec![],
                vec![],
                vec!["Dr.".into(), "Esq.".into()],
            ],
        );

        let slots = original.to_json_values();
        let restored = JCardValue::from_json_values(JCardDataType::Text, &slots);

        assert_eq!(restored, original);
    }

    #[test]
    fn from_json_reads_plain_slots_as_scalars() {
        let slots = [json!("Johnny"), json!("Joey")];
        let value = JCardValue::from_json_values(JCardDataType::Text, &slots);

        assert!(!value.is_structured());
        assert_eq!(value.values().len(), 2);
        assert_eq!(value.first_string(), Some("Johnny".to_string()));
    }

    #[test]
    fn empty_slots_hold_no_scalar() {
        let value = JCardValue::from_json_values(JCardDataType::Text, &[]);

        assert_eq!(value.first_scalar(), None);
        assert_eq!(value.first_string(), None);
    }

    #[test]
    fn scalars_convert_from_json_types() {
        assert_eq!(
            JCardScalar::from_json(&json!("text")),
            JCardScalar::Text("text".into())
        );
        assert_eq!(JCardScalar::from_json(&json!(42)), JCardScalar::Integer(42));
        assert_eq!(JCardScalar::from_json(&json!(1.5)), JCardScalar::Float(1.5));
        assert_eq!(JCardScalar::from_json(&json!(true)), JCardScalar::Boolean(true));
        assert_eq!(JCardScalar::from_json(&json!(null)), JCardScalar::Null);
        assert_eq!(JCardScalar::from_json(&json!({"a": 1})), JCardScalar::Null);
    }

    #[test]
    fn null_scalar_renders_as_empty_text() {
        let value = JCardValue::single(JCardDataType::Text, JCardScalar::Null);
        assert_eq!(value.first_string(), Some(String::new()));
    }
}
