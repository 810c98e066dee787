use std::io;
use watchtower::traits::{DiagnosticResultExt, ResultExt};
use watchtower::{Diagnostic, ErrorKind, Fault};

#[test]
fn ctx_on_err_wraps_fault() {
    let result: Result<(), Fault> = Err(Fault::MissingKey { key: "port".into() });
    let err = result.ctx("reading config").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingKey);
    assert_eq!(
        err.error_chain(),
        "reading config -> MissingKey: key \"port\" not found in mapping"
    );
}

#[test]
fn ctx_on_ok_passes_value_through() {
    let result: Result<i32, Fault> = Ok(42);
    assert_eq!(result.ctx("should not appear").unwrap(), 42);
}

#[test]
fn ctx_records_caller_as_origin() {
    let result: Result<(), Fault> = Err(Fault::UnsetLocal { name: "x".into() });
    let line = line!() + 1;
    let err = result.ctx("loading").unwrap_err();

    assert_eq!(err.origin().line, line);
    assert_eq!(err.origin().file, file!());
}

#[test]
fn ctx_converts_json_errors() {
    let result: Result<serde_json::Value, _> = serde_json::from_str("{ nope");
    let err = result.ctx("parsing").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn ctx_with_is_lazy() {
    let mut called = false;
    let result: Result<(), Fault> = Ok(());
    let _ = result.ctx_with(|| {
        called = true;
        "never".to_string()
    });
    assert!(!called);

    let result: Result<(), Fault> = Err(Fault::UnsetLocal { name: "x".into() });
    let err = result.ctx_with(|| format!("frame {}", 2)).unwrap_err();
    assert_eq!(err.context()[0].message(), "frame 2");
}

#[test]
fn wrap_ctx_pushes_outer_frames() {
    let result: Result<(), Diagnostic> =
        Err(Diagnostic::new(Fault::UnsetLocal { name: "x".into() }));
    let err = result.wrap_ctx("inner").wrap_ctx_with(|| "outer".to_string()).unwrap_err();

    let frames: Vec<String> = err.context_iter().map(|ctx| ctx.message()).collect();
    assert_eq!(frames, vec!["outer", "inner"]);
}

#[test]
fn from_io_classifies_not_found() {
    let not_found = Fault::from_io("a.json", io::Error::from(io::ErrorKind::NotFound));
    assert_eq!(not_found.kind(), ErrorKind::ResourceNotFound);

    let denied = Fault::from_io("a.json", io::Error::from(io::ErrorKind::PermissionDenied));
    assert_eq!(denied.kind(), ErrorKind::Io);
    assert!(denied.to_string().starts_with("i/o failure on `a.json`: "));
}
