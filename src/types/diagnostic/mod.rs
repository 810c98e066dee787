//! Diagnostic wrapper with an origin and a stack of context frames.
//!
//! [`Diagnostic`] enriches a [`Fault`] with:
//! - the [`Origin`] (file, line, column) where the fault was raised, captured
//!   through `#[track_caller]`
//! - an ordered stack of [`ErrorContext`] frames describing the call chain
//! - builder-style formatting via [`Diagnostic::fmt`]

use crate::traits::IntoErrorContext;
use crate::types::error_formatter::{ErrorFormatBuilder, ErrorFormatter};
use crate::types::{ErrorContext, ErrorKind, ErrorVec, Fault};
use core::fmt::{self, Display};
use std::panic::Location;

#[cfg(feature = "serde")]
use serde::Serialize;

mod fingerprint;
#[cfg(feature = "serde")]
mod report;
mod traits;

pub use fingerprint::FingerprintConfig;
#[cfg(feature = "serde")]
pub use report::DiagnosticReport;

/// Source position at which a fault was raised.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Origin {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl Origin {
    /// Captures the location of the nearest caller not marked `#[track_caller]`.
    #[inline]
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&'static Location<'static>> for Origin {
    fn from(location: &'static Location<'static>) -> Self {
        Self { file: location.file(), line: location.line(), column: location.column() }
    }
}

impl Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// A [`Fault`] together with where it came from and how it got here.
#[must_use]
#[derive(Debug)]
pub struct Diagnostic {
    pub(crate) fault: Fault,
    pub(crate) context: ErrorVec<ErrorContext>,
    pub(crate) origin: Origin,
}

impl Diagnostic {
    /// Creates a diagnostic originating at the caller.
    #[inline]
    #[track_caller]
    pub fn new(fault: Fault) -> Self {
        Self::at(fault, Origin::caller())
    }

    /// Creates a diagnostic with an explicit origin.
    #[inline]
    pub fn at(fault: Fault, origin: Origin) -> Self {
        Self { fault, context: ErrorVec::new(), origin }
    }

    /// Pushes a context frame. The most recently pushed frame is the outermost.
    #[inline]
    pub fn with_context<Ctx>(mut self, ctx: Ctx) -> Self
    where
        Ctx: IntoErrorContext,
    {
        self.context.push(ctx.into_error_context());
        self
    }

    /// Extends the context stack with pre-built frames, in push order.
    #[inline]
    pub fn with_contexts<I>(mut self, contexts: I) -> Self
    where
        I: IntoIterator<Item = ErrorContext>,
    {
        self.context.extend(contexts);
        self
    }

    #[inline]
    pub fn fault(&self) -> &Fault {
        &self.fault
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.fault.kind()
    }

    /// Returns the fault's message without kind or context.
    #[inline]
    pub fn message(&self) -> String {
        self.fault.to_string()
    }

    #[inline]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Returns the context stack, outermost frame first.
    #[inline]
    pub fn context(&self) -> ErrorVec<ErrorContext> {
        let mut result = ErrorVec::with_capacity(self.context.len());
        result.extend(self.context.iter().rev().cloned());
        result
    }

    /// Borrows the context stack, outermost frame first.
    #[inline]
    pub fn context_iter(&self) -> core::iter::Rev<core::slice::Iter<'_, ErrorContext>> {
        self.context.iter().rev()
    }

    #[inline]
    pub fn into_fault(self) -> Fault {
        self.fault
    }

    /// Returns a builder for customizing how the diagnostic is rendered.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> ErrorFormatBuilder<'_> {
        ErrorFormatBuilder::new(self)
    }

    /// Formats the diagnostic using a closure to configure the builder.
    #[must_use]
    pub fn format_with<F>(&self, f: F) -> String
    where
        F: FnOnce(ErrorFormatBuilder<'_>) -> ErrorFormatBuilder<'_>,
    {
        f(self.fmt()).to_string()
    }

    /// Formats the frames and the fault through a custom formatter.
    #[must_use]
    pub fn error_chain_with<F>(&self, formatter: F) -> String
    where
        F: ErrorFormatter,
    {
        let root = self.fmt().root();
        let mut items: Vec<&dyn Display> = Vec::with_capacity(self.context.len() + 1);
        for ctx in self.context_iter() {
            items.push(ctx as &dyn Display);
        }
        items.push(&root);

        formatter.format_chain(items.iter().copied())
    }

    /// Returns the single-line chain, e.g. `outer -> inner -> Kind: message`.
    #[must_use]
    pub fn error_chain(&self) -> String {
        self.fmt().to_string()
    }

    /// Returns the multi-line trace printed by the driver.
    #[must_use]
    pub fn traceback(&self) -> String {
        self.fmt().traceback().to_string()
    }

    /// Generates a stable fingerprint for de-duplicating diagnostics.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint_config().compute()
    }

    #[must_use]
    pub fn fingerprint_hex(&self) -> String {
        self.fingerprint_config().compute_hex()
    }

    /// Creates a fingerprint configuration for customizing what gets hashed.
    #[must_use]
    pub fn fingerprint_config(&self) -> FingerprintConfig<'_> {
        FingerprintConfig::new(self)
    }

    /// Takes a serializable snapshot of the diagnostic.
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn report(&self) -> DiagnosticReport {
        DiagnosticReport::from(self)
    }
}
