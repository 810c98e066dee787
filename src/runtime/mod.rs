//! A tiny dynamic runtime the catalog operations execute against.
//!
//! Everything that a dynamically typed program would only discover at call time
//! (a name that was never bound, a local read before assignment, a keyed lookup
//! on plain text) is modelled here as an explicit, fallible lookup returning a
//! [`Fault`](crate::Fault) instead of a compile error.

pub mod scope;
pub mod value;

pub use scope::{Frame, Scope};
pub use value::Value;
