//! Traits used to build and enrich diagnostics.
//!
//! - [`IntoErrorContext`]: conversion into a single context frame
//! - [`ResultExt`]: lift a `Result<T, impl Into<Fault>>` into `Result<T, Diagnostic>`
//! - [`DiagnosticResultExt`]: push more frames onto an existing diagnostic
//!
//! [`Fault`]: crate::Fault

pub mod into_error_context;
pub mod result_ext;

pub use into_error_context::IntoErrorContext;
pub use result_ext::{DiagnosticResultExt, ResultExt};
