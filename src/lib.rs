//! Watchtower trips nine runtime error kinds on purpose and prints a diagnostic
//! trace for each one.
//!
//! The crate is split the same way the run is:
//!
//! - [`types`]: [`Fault`] (the raised error), [`Diagnostic`] (fault plus origin
//!   and context frames) and the formatters that render them
//! - [`runtime`]: the tagged [`Value`](runtime::Value) and the scopes and frames
//!   names are resolved against
//! - [`catalog`]: the fixed, ordered list of failing operations
//! - [`driver`]: runs the catalog, catching and printing every failure
//!
//! # Examples
//!
//! ## Running a single case
//!
//! ```
//! use watchtower::{catalog, ErrorKind};
//!
//! let case = catalog::find("trigger_missing_key").unwrap();
//! let err = case.invoke().unwrap_err();
//!
//! assert_eq!(err.kind(), ErrorKind::MissingKey);
//! assert!(err.message().contains("\"port\""));
//! ```
//!
//! ## Rendering a trace
//!
//! ```
//! use watchtower::{Diagnostic, Fault};
//!
//! let err = Diagnostic::new(Fault::Arithmetic { numerator: 10, denominator: 0 })
//!     .with_context("computing ratio");
//!
//! let trace = format!("{:#}", err);
//! assert!(trace.starts_with("Trace (most recent call last):\n  computing ratio\n  at "));
//! assert!(trace.ends_with("Arithmetic: 10 / 0: division by zero"));
//! ```

/// The fixed catalog of failing operations
pub mod catalog;
/// Driver that runs the catalog and prints traces
pub mod driver;
/// Macros for context frames and early returns
pub mod macros;
/// Convenience re-exports
pub mod prelude;
/// Dynamic values and name resolution
pub mod runtime;
/// Traits for building and enriching diagnostics
pub mod traits;
/// Fault, Diagnostic, context frames and formatting
pub mod types;

pub use driver::{catch, Driver, DriverConfig, RunSummary};
pub use traits::*;
pub use types::{
    error_formatter::ErrorFormatConfig, Diagnostic, DiagnosticResult, ErrorContext, ErrorKind,
    ErrorVec, Fault, LazyContext, Origin,
};
