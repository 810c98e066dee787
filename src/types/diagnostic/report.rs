//! Serializable snapshot of a [`Diagnostic`].
//!
//! `Fault` wraps foreign error types (`io::Error`, `serde_json::Error`) that do
//! not implement `Serialize`, so the report flattens the fault to its kind and
//! rendered message.
use super::{Diagnostic, Origin};
use crate::types::{ErrorContext, ErrorKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    pub kind: ErrorKind,
    pub message: String,
    pub origin: Origin,
    /// Outermost frame first.
    pub context: Vec<ErrorContext>,
    pub fingerprint: String,
}

impl From<&Diagnostic> for DiagnosticReport {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            kind: diagnostic.kind(),
            message: diagnostic.message(),
            origin: diagnostic.origin(),
            context: diagnostic.context_iter().cloned().collect(),
            fingerprint: diagnostic.fingerprint_hex(),
        }
    }
}
