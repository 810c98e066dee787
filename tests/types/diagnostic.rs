use std::error::Error;
use watchtower::{Diagnostic, ErrorContext, ErrorKind, Fault, Origin};

fn missing_port() -> Diagnostic {
    Diagnostic::at(
        Fault::MissingKey { key: "port".into() },
        Origin { file: "src/config.rs", line: 12, column: 5 },
    )
}

#[test]
fn new_captures_the_caller() {
    let line = line!() + 1;
    let err = Diagnostic::new(Fault::UnsetLocal { name: "x".into() });
    assert_eq!(err.origin().file, file!());
    assert_eq!(err.origin().line, line);
}

#[test]
fn question_mark_captures_the_conversion_site() {
    fn lookup() -> Result<(), Diagnostic> {
        Err::<(), _>(Fault::MissingKey { key: "port".into() })?;
        Ok(())
    }
    let err = lookup().unwrap_err();
    assert_eq!(err.origin().file, file!());
}

#[test]
fn context_is_outermost_first() {
    let err = missing_port()
        .with_context(ErrorContext::tag("config"))
        .with_context("loading settings");

    let contexts = err.context();
    assert_eq!(contexts.len(), 2);
    assert_eq!(contexts[0], ErrorContext::new("loading settings"));
    assert_eq!(contexts[1], ErrorContext::tag("config"));
}

#[test]
fn with_contexts_extends_in_push_order() {
    let err = missing_port()
        .with_contexts([ErrorContext::new("first"), ErrorContext::new("second")]);
    let frames: Vec<String> = err.context_iter().map(|ctx| ctx.message()).collect();
    assert_eq!(frames, vec!["second", "first"]);
}

#[test]
fn kind_and_message_come_from_the_fault() {
    let err = missing_port();
    assert_eq!(err.kind(), ErrorKind::MissingKey);
    assert_eq!(err.message(), "key \"port\" not found in mapping");
    assert!(matches!(err.into_fault(), Fault::MissingKey { .. }));
}

#[test]
fn display_is_single_line_chain() {
    let err = missing_port().with_context("loading settings");
    assert_eq!(
        err.to_string(),
        "loading settings -> MissingKey: key \"port\" not found in mapping"
    );
}

#[test]
fn alternate_display_is_traceback() {
    let err = missing_port().with_context("loading settings");
    assert_eq!(
        format!("{:#}", err),
        "Trace (most recent call last):\n  loading settings\n  at src/config.rs:12:5\nMissingKey: key \"port\" not found in mapping"
    );
    assert_eq!(format!("{:#}", err), err.traceback());
}

#[test]
fn traceback_without_context_still_shows_origin() {
    assert_eq!(
        missing_port().traceback(),
        "Trace (most recent call last):\n  at src/config.rs:12:5\nMissingKey: key \"port\" not found in mapping"
    );
}

#[test]
fn source_is_the_fault_and_its_cause() {
    let io = std::io::Error::from(std::io::ErrorKind::NotFound);
    let err = Diagnostic::new(Fault::from_io("a.json", io));

    let fault = err.source().unwrap();
    assert!(fault.to_string().starts_with("cannot open `a.json`"));
    assert!(fault.source().is_some());
}

#[test]
fn origin_displays_file_line_column() {
    assert_eq!(missing_port().origin().to_string(), "src/config.rs:12:5");
}
