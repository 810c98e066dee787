//! Error types and utilities.
//!
//! # Examples
//!
//! ```
//! use watchtower::{Diagnostic, ErrorContext, ErrorKind, Fault};
//!
//! let err = Diagnostic::new(Fault::OutOfRange { index: 999, len: 3 })
//!     .with_context(ErrorContext::tag("demo"))
//!     .with_context("indexing nums");
//!
//! assert_eq!(err.kind(), ErrorKind::OutOfRange);
//! assert_eq!(
//!     err.error_chain(),
//!     "indexing nums -> [demo] -> OutOfRange: index 999 out of range for list of length 3"
//! );
//! ```
use smallvec::SmallVec;

pub mod diagnostic;
pub mod error_context;
pub mod error_formatter;
pub mod fault;
pub mod lazy_context;

pub use diagnostic::*;
pub use error_context::*;
pub use fault::*;
pub use lazy_context::*;

/// SmallVec-backed collection used for context frames.
///
/// Inline storage covers the common case of a diagnostic carrying a couple of
/// frames without a heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Result alias for operations that fail with a [`Diagnostic`].
pub type DiagnosticResult<T> = Result<T, Diagnostic>;
