//! The core error raised by every catalog operation.
//!
//! [`Fault`] carries one variant per error kind together with the data that
//! explains it (the missing key, the offending index, the path that could not be
//! opened). [`ErrorKind`] is the plain, copyable name of a fault's variant and is
//! what tests and the driver compare against.
//!
//! # Examples
//!
//! ```
//! use watchtower::{ErrorKind, Fault};
//!
//! let fault = Fault::MissingKey { key: "port".into() };
//! assert_eq!(fault.kind(), ErrorKind::MissingKey);
//! assert_eq!(fault.to_string(), "key \"port\" not found in mapping");
//! ```
use core::fmt;
use std::io;

#[cfg(feature = "serde")]
use serde::Serialize;
use thiserror::Error;

/// Names the category of a [`Fault`].
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    /// A name was looked up in a scope that never bound it.
    UnresolvedReference,
    /// A file or other resource does not exist.
    ResourceNotFound,
    /// Input text is not well-formed structured data.
    Parse,
    /// A keyed lookup was applied to a value that is not a mapping.
    WrongType,
    /// A mapping does not contain the requested key.
    MissingKey,
    /// A sequence was indexed past its end.
    OutOfRange,
    /// An operation was invoked on a value whose type does not provide it.
    WrongCapability,
    /// Arithmetic with no defined result, such as division by zero.
    Arithmetic,
    /// A local slot was read before anything was assigned to it.
    UnsetLocal,
    /// Any other I/O failure.
    Io,
}

impl ErrorKind {
    /// Every kind the catalog demonstrates, in catalog order.
    pub const CATALOG: [ErrorKind; 9] = [
        ErrorKind::UnresolvedReference,
        ErrorKind::ResourceNotFound,
        ErrorKind::Parse,
        ErrorKind::WrongType,
        ErrorKind::MissingKey,
        ErrorKind::OutOfRange,
        ErrorKind::WrongCapability,
        ErrorKind::Arithmetic,
        ErrorKind::UnsetLocal,
    ];

    /// Returns the kind's display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnresolvedReference => "UnresolvedReference",
            Self::ResourceNotFound => "ResourceNotFound",
            Self::Parse => "Parse",
            Self::WrongType => "WrongType",
            Self::MissingKey => "MissingKey",
            Self::OutOfRange => "OutOfRange",
            Self::WrongCapability => "WrongCapability",
            Self::Arithmetic => "Arithmetic",
            Self::UnsetLocal => "UnsetLocal",
            Self::Io => "Io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A runtime failure, one variant per [`ErrorKind`].
#[derive(Debug, Error)]
pub enum Fault {
    #[error("name `{name}` is not defined")]
    UnresolvedReference { name: String },

    #[error("cannot open `{path}`: {source}")]
    ResourceNotFound {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{type_name} value does not support keyed lookup (key {key:?})")]
    WrongType { type_name: &'static str, key: String },

    #[error("key {key:?} not found in mapping")]
    MissingKey { key: String },

    #[error("index {index} out of range for list of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("{type_name} value has no operation `{operation}`")]
    WrongCapability { type_name: &'static str, operation: &'static str },

    #[error("{numerator} / {denominator}: {}", quotient_failure(.denominator))]
    Arithmetic { numerator: i64, denominator: i64 },

    #[error("local variable `{name}` referenced before assignment")]
    UnsetLocal { name: String },

    #[error("i/o failure on `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl Fault {
    /// Returns the kind of this fault.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnresolvedReference { .. } => ErrorKind::UnresolvedReference,
            Self::ResourceNotFound { .. } => ErrorKind::ResourceNotFound,
            Self::Parse(_) => ErrorKind::Parse,
            Self::WrongType { .. } => ErrorKind::WrongType,
            Self::MissingKey { .. } => ErrorKind::MissingKey,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::WrongCapability { .. } => ErrorKind::WrongCapability,
            Self::Arithmetic { .. } => ErrorKind::Arithmetic,
            Self::UnsetLocal { .. } => ErrorKind::UnsetLocal,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// Classifies an I/O error raised while touching `path`.
    ///
    /// `NotFound` becomes [`Fault::ResourceNotFound`]; everything else is
    /// reported as [`Fault::Io`].
    pub fn from_io(path: impl Into<String>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::ResourceNotFound { path, source },
            _ => Self::Io { path, source },
        }
    }
}

fn quotient_failure(denominator: &i64) -> &'static str {
    if *denominator == 0 {
        "division by zero"
    } else {
        "quotient overflows i64"
    }
}
