//! jCard value model (RFC 7095).
//!
//! A jCard property line is `[name, parameters, data type, value...]`; this
//! module covers the last two slots. [`JCardValue`] holds the typed value
//! with its grouping structure, and converts to and from `serde_json`
//! values at the document boundary.

mod data_type;
mod value;

pub use data_type::JCardDataType;
pub use value::{JCardScalar, JCardValue};
