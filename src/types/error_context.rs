//! Frames attached to a [`Diagnostic`](crate::Diagnostic).
//!
//! A frame is one line of the call chain printed in a trace. Most frames are
//! free-form messages; a tag is a short category label that also feeds the
//! diagnostic's fingerprint.
#[cfg(feature = "serde")]
use serde::Serialize;
use std::fmt::Display;

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Message(String),
    Tag(String),
}

impl ErrorContext {
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self::Message(message.into())
    }

    #[inline]
    pub fn tag<S: Into<String>>(tag: S) -> Self {
        Self::Tag(tag.into())
    }

    /// Renders the frame the way it appears in a trace line.
    #[inline]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(text) => f.write_str(text),
            Self::Tag(tag) => write!(f, "[{tag}]"),
        }
    }
}
