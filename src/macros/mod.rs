//! Macros for building context frames and raising diagnostics.
//!
//! - [`macro@crate::context`] defers formatting until a frame is actually attached.
//! - [`macro@crate::raise`] returns early with a [`Diagnostic`](crate::Diagnostic)
//!   whose origin is the macro call site.
//! - [`macro@crate::impl_error_context`] implements
//!   [`IntoErrorContext`](crate::traits::IntoErrorContext) for `Display` types.

/// Creates a lazily-evaluated context frame from `format!` arguments.
///
/// # Examples
///
/// ```
/// use watchtower::{context, Diagnostic, Fault};
///
/// let key = "port";
/// let err = Diagnostic::new(Fault::MissingKey { key: key.into() })
///     .with_context(context!("reading {} from config", key));
/// assert_eq!(err.context()[0].message(), "reading port from config");
/// ```
#[macro_export]
macro_rules! context {
    ($($arg:tt)*) => {
        $crate::types::LazyContext::new(move || format!($($arg)*))
    };
}

/// Returns early with `Err(Diagnostic)` built from a [`Fault`](crate::Fault).
///
/// Extra arguments are pushed as context frames in order, so the last one is
/// the outermost.
///
/// # Examples
///
/// ```
/// use watchtower::{raise, DiagnosticResult, ErrorKind, Fault};
///
/// fn lookup(len: usize) -> DiagnosticResult<()> {
///     raise!(Fault::OutOfRange { index: 999, len }, "indexing nums");
/// }
///
/// let err = lookup(3).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::OutOfRange);
/// ```
#[macro_export]
macro_rules! raise {
    ($fault:expr $(,)?) => {
        return ::core::result::Result::Err($crate::types::Diagnostic::new($fault))
    };
    ($fault:expr, $($ctx:expr),+ $(,)?) => {
        return ::core::result::Result::Err(
            $crate::types::Diagnostic::new($fault)$(.with_context($ctx))+
        )
    };
}

/// Implements `IntoErrorContext` for a type using its `Display` output.
///
/// # Examples
///
/// ```
/// use watchtower::{impl_error_context, traits::IntoErrorContext};
/// use std::fmt;
///
/// struct Step(u32);
///
/// impl fmt::Display for Step {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "step {}", self.0)
///     }
/// }
///
/// impl_error_context!(Step);
///
/// assert_eq!(Step(3).into_error_context().message(), "step 3");
/// ```
#[macro_export]
macro_rules! impl_error_context {
    ($type:ty) => {
        impl $crate::traits::IntoErrorContext for $type {
            fn into_error_context(self) -> $crate::types::ErrorContext {
                $crate::types::ErrorContext::new(self.to_string())
            }
        }
    };
}
