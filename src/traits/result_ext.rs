//! Extension traits for attaching context to fallible results.
//!
//! [`ResultExt`] lifts any `Result` whose error converts into a [`Fault`] into a
//! `Result<T, Diagnostic>`, recording the caller as the diagnostic's origin.
//! [`DiagnosticResultExt`] pushes further frames onto a result that already
//! carries a [`Diagnostic`].
//!
//! # Examples
//!
//! ```
//! use watchtower::{DiagnosticResultExt, ErrorKind, ResultExt};
//!
//! fn parse() -> Result<serde_json::Value, watchtower::Diagnostic> {
//!     serde_json::from_str("{ nope").ctx("decoding payload")
//! }
//!
//! let err = parse().wrap_ctx("loading settings").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Parse);
//! assert_eq!(err.context()[0].message(), "loading settings");
//! assert_eq!(err.context()[1].message(), "decoding payload");
//! ```

use crate::traits::IntoErrorContext;
use crate::types::{Diagnostic, Fault, LazyContext, Origin};

/// Adds context to a `Result` whose error converts into a [`Fault`].
pub trait ResultExt<T> {
    /// Wraps the error in a [`Diagnostic`] originating at the caller and
    /// attaches `msg` as its first frame.
    fn ctx<C: IntoErrorContext>(self, msg: C) -> Result<T, Diagnostic>;

    /// Like [`ctx`](ResultExt::ctx), but only builds the message on failure.
    fn ctx_with<F>(self, f: F) -> Result<T, Diagnostic>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Fault>,
{
    #[inline]
    #[track_caller]
    fn ctx<C: IntoErrorContext>(self, msg: C) -> Result<T, Diagnostic> {
        let origin = Origin::caller();
        self.map_err(|e| Diagnostic::at(e.into(), origin).with_context(msg))
    }

    #[inline]
    #[track_caller]
    fn ctx_with<F>(self, f: F) -> Result<T, Diagnostic>
    where
        F: FnOnce() -> String,
    {
        let origin = Origin::caller();
        self.map_err(|e| Diagnostic::at(e.into(), origin).with_context(LazyContext::new(f)))
    }
}

/// Adds context to a `Result` that already carries a [`Diagnostic`].
pub trait DiagnosticResultExt<T> {
    /// Pushes `msg` as the new outermost frame.
    fn wrap_ctx<C: IntoErrorContext>(self, msg: C) -> Self;

    /// Pushes a lazily built frame.
    fn wrap_ctx_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> String;
}

impl<T> DiagnosticResultExt<T> for Result<T, Diagnostic> {
    #[inline]
    fn wrap_ctx<C: IntoErrorContext>(self, msg: C) -> Self {
        self.map_err(|e| e.with_context(msg))
    }

    #[inline]
    fn wrap_ctx_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(LazyContext::new(f)))
    }
}
