//! Conversion into structured error context.
//!
//! Implemented for plain strings (which become [`ErrorContext::Message`]),
//! for [`ErrorContext`] itself, and for [`LazyContext`](crate::LazyContext).
//!
//! # Examples
//!
//! ```
//! use watchtower::{traits::IntoErrorContext, ErrorContext};
//!
//! let ctx1 = "simple message".into_error_context();
//! let ctx2 = String::from("owned message").into_error_context();
//! let ctx3 = ErrorContext::tag("config").into_error_context();
//!
//! assert_eq!(ctx1.message(), "simple message");
//! assert_eq!(ctx2.message(), "owned message");
//! assert_eq!(ctx3.message(), "[config]");
//! ```
use std::borrow::Cow;

use crate::types::error_context::ErrorContext;

/// Converts a type into an [`ErrorContext`] frame.
///
/// Types that already implement `Display` can use
/// [`impl_error_context!`](crate::impl_error_context) instead of a manual impl.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as error context",
    label = "this type does not implement `IntoErrorContext`",
    note = "implement `IntoErrorContext` manually or use `impl_error_context!({Self})` macro"
)]
pub trait IntoErrorContext {
    /// Converts `self` into an [`ErrorContext`].
    fn into_error_context(self) -> ErrorContext;
}

impl IntoErrorContext for String {
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        ErrorContext::new(self)
    }
}

impl IntoErrorContext for &'static str {
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        ErrorContext::new(self)
    }
}

impl IntoErrorContext for Cow<'static, str> {
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        ErrorContext::new(self)
    }
}

impl IntoErrorContext for ErrorContext {
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        self
    }
}
