use std::borrow::Cow;
use watchtower::traits::IntoErrorContext;
use watchtower::{ErrorContext, LazyContext};

#[test]
fn strings_become_messages() {
    assert_eq!("static".into_error_context(), ErrorContext::Message("static".into()));
    assert_eq!(String::from("owned").into_error_context(), ErrorContext::new("owned"));
    assert_eq!(Cow::Borrowed("cow").into_error_context(), ErrorContext::new("cow"));
}

#[test]
fn error_context_converts_to_itself() {
    let ctx = ErrorContext::tag("retry");
    assert_eq!(ctx.clone().into_error_context(), ctx);
}

#[test]
fn lazy_context_evaluates_on_conversion() {
    let lazy = LazyContext::new(|| format!("computed {}", 42));
    assert_eq!(lazy.into_error_context().message(), "computed 42");
}
