//! Deferred context generation.
//!
//! [`LazyContext`] wraps a closure that formats a context message only when a
//! frame is actually attached to a [`Diagnostic`](crate::Diagnostic), so the
//! success path of a fallible call never pays for the `format!`.
//!
//! # Examples
//!
//! ```
//! use watchtower::{Fault, LazyContext, ResultExt};
//!
//! let result: Result<(), Fault> = Err(Fault::UnsetLocal { name: "x".into() });
//! let err = result
//!     .ctx(LazyContext::new(|| format!("frame depth {}", 1)))
//!     .unwrap_err();
//! assert_eq!(err.context()[0].message(), "frame depth 1");
//! ```
use crate::{traits::IntoErrorContext, types::error_context::ErrorContext};

/// A lazily-evaluated error context that defers string generation until needed.
#[repr(transparent)]
pub struct LazyContext<F> {
    generator: F,
}

impl<F> LazyContext<F> {
    /// Creates a new `LazyContext` from a closure.
    #[inline]
    pub fn new(generator: F) -> Self {
        Self { generator }
    }
}

impl<F> IntoErrorContext for LazyContext<F>
where
    F: FnOnce() -> String,
{
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        ErrorContext::new((self.generator)())
    }
}
