//! Convenience re-exports.
//!
//! ```
//! use watchtower::prelude::*;
//!
//! fn load() -> DiagnosticResult<serde_json::Value> {
//!     serde_json::from_str("{}").ctx("decoding config")
//! }
//!
//! assert!(load().is_ok());
//! ```

pub use crate::{context, raise};

pub use crate::catalog::{catalog, Case};
pub use crate::driver::{Driver, DriverConfig};
pub use crate::types::{Diagnostic, DiagnosticResult, ErrorContext, ErrorKind, Fault};

pub use crate::traits::{DiagnosticResultExt, IntoErrorContext, ResultExt};
