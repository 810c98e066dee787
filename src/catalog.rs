//! The fixed catalog of demonstration cases.
//!
//! Every operation takes no input and deterministically fails with exactly one
//! [`ErrorKind`]. None of them can succeed: each failing step sits on the only
//! path through the function.
//!
//! The unresolved-reference and unset-local cases run against the small
//! [`runtime`](crate::runtime) so the failure happens at call time, as a
//! lookup in a symbol table or frame, instead of being rejected by the compiler.

use std::fs;
use std::hint::black_box;

use crate::runtime::{Frame, Scope, Value};
use crate::types::{DiagnosticResult, ErrorKind, Fault};
use crate::{context, raise, ResultExt};

/// A path that must not exist wherever the catalog runs.
pub const MISSING_CONFIG_PATH: &str = "definitely_not_real_config.json";

/// Input for the parse case; truncated before the first key is even quoted.
pub const MALFORMED_JSON: &str = "{ not valid json...";

/// A zero-argument operation that is expected to fail.
pub type Operation = fn() -> DiagnosticResult<()>;

/// One entry of the catalog.
#[derive(Debug, Clone, Copy)]
pub struct Case {
    /// Function name of the operation, stable across runs.
    pub name: &'static str,
    /// Human-readable header text.
    pub label: &'static str,
    /// The kind the operation raises.
    pub expected: ErrorKind,
    pub operation: Operation,
}

impl Case {
    /// Runs the operation directly, outside any driver.
    pub fn invoke(&self) -> DiagnosticResult<()> {
        (self.operation)()
    }
}

static CATALOG: [Case; 9] = [
    Case {
        name: "trigger_unresolved_reference",
        label: "UnresolvedReference (undefined variable)",
        expected: ErrorKind::UnresolvedReference,
        operation: trigger_unresolved_reference,
    },
    Case {
        name: "trigger_resource_not_found",
        label: "ResourceNotFound (missing file)",
        expected: ErrorKind::ResourceNotFound,
        operation: trigger_resource_not_found,
    },
    Case {
        name: "trigger_parse",
        label: "Parse (bad JSON)",
        expected: ErrorKind::Parse,
        operation: trigger_parse,
    },
    Case {
        name: "trigger_wrong_type",
        label: "WrongType (wrong type usage)",
        expected: ErrorKind::WrongType,
        operation: trigger_wrong_type,
    },
    Case {
        name: "trigger_missing_key",
        label: "MissingKey (missing key)",
        expected: ErrorKind::MissingKey,
        operation: trigger_missing_key,
    },
    Case {
        name: "trigger_out_of_range",
        label: "OutOfRange (out of range)",
        expected: ErrorKind::OutOfRange,
        operation: trigger_out_of_range,
    },
    Case {
        name: "trigger_wrong_capability",
        label: "WrongCapability (wrong attribute)",
        expected: ErrorKind::WrongCapability,
        operation: trigger_wrong_capability,
    },
    Case {
        name: "trigger_arithmetic",
        label: "Arithmetic (divide by zero)",
        expected: ErrorKind::Arithmetic,
        operation: trigger_arithmetic,
    },
    Case {
        name: "trigger_unset_local",
        label: "UnsetLocal (local var not set)",
        expected: ErrorKind::UnsetLocal,
        operation: trigger_unset_local,
    },
];

/// Returns the catalog in its fixed order.
pub fn catalog() -> &'static [Case] {
    &CATALOG
}

/// Finds a case by operation name.
pub fn find(name: &str) -> Option<&'static Case> {
    CATALOG.iter().find(|case| case.name == name)
}

/// Builds a config path from a global that nothing ever binds.
pub fn trigger_unresolved_reference() -> DiagnosticResult<()> {
    let globals = Scope::new();
    let file_path = globals.lookup("file_path")?;
    let _config_path = file_path.concat(&Value::from("_config.json"))?;
    Ok(())
}

pub fn trigger_resource_not_found() -> DiagnosticResult<()> {
    match fs::read_to_string(MISSING_CONFIG_PATH) {
        Ok(_contents) => Ok(()),
        Err(source) => raise!(
            Fault::from_io(MISSING_CONFIG_PATH, source),
            context!("reading {}", MISSING_CONFIG_PATH)
        ),
    }
}

pub fn trigger_parse() -> DiagnosticResult<()> {
    let _config: serde_json::Value =
        serde_json::from_str(MALFORMED_JSON).ctx("decoding inline config")?;
    Ok(())
}

/// Applies a keyed lookup to plain text.
pub fn trigger_wrong_type() -> DiagnosticResult<()> {
    let config = Value::from("not a dict");
    let _port = config.get("port")?;
    Ok(())
}

pub fn trigger_missing_key() -> DiagnosticResult<()> {
    let config = Value::map([("host", "localhost")]);
    let _port = config.get("port")?;
    Ok(())
}

pub fn trigger_out_of_range() -> DiagnosticResult<()> {
    let nums = Value::list([1_i64, 2, 3]);
    let _value = nums.index(999)?;
    Ok(())
}

/// Calls the text-only `upper` on a mapping.
pub fn trigger_wrong_capability() -> DiagnosticResult<()> {
    let config = Value::map([("port", 8080_i64)]);
    let _shouted = config.upper()?;
    Ok(())
}

pub fn trigger_arithmetic() -> DiagnosticResult<()> {
    let _quotient = Value::Int(10).div(&Value::Int(0))?;
    Ok(())
}

/// Reads `x` on the path where its only assignment was skipped.
pub fn trigger_unset_local() -> DiagnosticResult<()> {
    let mut frame = Frame::declare(&["x"]);
    if black_box(false) {
        frame.assign("x", Value::Int(123))?;
    }
    let _x = frame.load("x")?;
    Ok(())
}
