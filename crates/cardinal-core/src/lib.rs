//! Core types shared across the cardinal workspace: vCard version and
//! compatibility policy, diagnostic collection, and the base error type.

pub mod error;
pub mod version;
pub mod warning;

pub use error::{CoreError, CoreResult};
pub use version::{CompatibilityMode, VCardVersion};
pub use warning::WarningSink;
