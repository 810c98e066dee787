use std::cell::Cell;
use watchtower::{context, impl_error_context, raise, DiagnosticResult, ErrorKind, Fault};

struct Attempt(u32);

impl std::fmt::Display for Attempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "attempt #{}", self.0)
    }
}

impl_error_context!(Attempt);

fn raises_plain() -> DiagnosticResult<()> {
    raise!(Fault::UnsetLocal { name: "x".into() });
}

fn raises_with_frames() -> DiagnosticResult<u8> {
    raise!(Fault::OutOfRange { index: 4, len: 1 }, "inner", Attempt(2));
}

#[test]
fn raise_returns_early_with_origin_here() {
    let err = raises_plain().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsetLocal);
    assert_eq!(err.origin().file, file!());
    assert!(err.context().is_empty());
}

#[test]
fn raise_pushes_frames_in_order() {
    let err = raises_with_frames().unwrap_err();
    let frames: Vec<String> = err.context_iter().map(|ctx| ctx.message()).collect();
    assert_eq!(frames, vec!["attempt #2", "inner"]);
}

#[test]
fn context_macro_is_lazy() {
    let flag = Cell::new(false);
    let evaluated = &flag;
    let lazy = context!("{}", {
        evaluated.set(true);
        "value"
    });
    assert!(!evaluated.get());

    let err =
        watchtower::Diagnostic::new(Fault::UnsetLocal { name: "x".into() }).with_context(lazy);
    assert!(evaluated.get());
    assert_eq!(err.context()[0].message(), "value");
}
