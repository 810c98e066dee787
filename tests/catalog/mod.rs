use watchtower::catalog::{self, MISSING_CONFIG_PATH};
use watchtower::{ErrorKind, Fault};

#[test]
fn every_case_fails_when_invoked_directly() {
    for case in catalog::catalog() {
        assert!(case.invoke().is_err(), "{} returned normally", case.name);
    }
}

#[test]
fn every_case_raises_its_expected_kind() {
    for case in catalog::catalog() {
        let err = case.invoke().unwrap_err();
        assert_eq!(err.kind(), case.expected, "{} raised the wrong kind", case.name);
    }
}

#[test]
fn catalog_order_is_fixed() {
    let kinds: Vec<ErrorKind> = catalog::catalog().iter().map(|case| case.expected).collect();
    assert_eq!(kinds, ErrorKind::CATALOG);
}

#[test]
fn catalog_is_stable_across_calls() {
    let first: Vec<&str> = catalog::catalog().iter().map(|case| case.name).collect();
    let second: Vec<&str> = catalog::catalog().iter().map(|case| case.name).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 9);
}

#[test]
fn find_locates_cases_by_name() {
    let case = catalog::find("trigger_arithmetic").unwrap();
    assert_eq!(case.label, "Arithmetic (divide by zero)");
    assert!(catalog::find("trigger_nothing").is_none());
}

#[test]
fn unresolved_reference_names_the_missing_global() {
    let err = catalog::trigger_unresolved_reference().unwrap_err();
    assert!(matches!(err.fault(), Fault::UnresolvedReference { name } if name == "file_path"));
}

#[test]
fn resource_not_found_reports_the_path() {
    assert!(!std::path::Path::new(MISSING_CONFIG_PATH).exists());

    let err = catalog::trigger_resource_not_found().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
    assert!(err.message().contains(MISSING_CONFIG_PATH));
    assert_eq!(err.context()[0].message(), format!("reading {MISSING_CONFIG_PATH}"));
}

#[test]
fn parse_error_carries_decoding_context() {
    let err = catalog::trigger_parse().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(err.context()[0].message(), "decoding inline config");
    assert!(err.message().starts_with("malformed JSON: "));
}

#[test]
fn wrong_type_is_keyed_lookup_on_text() {
    let err = catalog::trigger_wrong_type().unwrap_err();
    assert!(matches!(
        err.fault(),
        Fault::WrongType { type_name: "text", key } if key == "port"
    ));
}

#[test]
fn missing_key_references_port() {
    let err = catalog::trigger_missing_key().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingKey);
    assert_eq!(err.message(), "key \"port\" not found in mapping");
}

#[test]
fn out_of_range_reports_index_and_length() {
    let err = catalog::trigger_out_of_range().unwrap_err();
    assert!(matches!(err.fault(), Fault::OutOfRange { index: 999, len: 3 }));
}

#[test]
fn wrong_capability_is_upper_on_a_map() {
    let err = catalog::trigger_wrong_capability().unwrap_err();
    assert!(matches!(
        err.fault(),
        Fault::WrongCapability { type_name: "map", operation: "upper" }
    ));
}

#[test]
fn arithmetic_is_ten_divided_by_zero() {
    let err = catalog::trigger_arithmetic().unwrap_err();
    assert!(matches!(err.fault(), Fault::Arithmetic { numerator: 10, denominator: 0 }));
}

#[test]
fn unset_local_names_x() {
    let err = catalog::trigger_unset_local().unwrap_err();
    assert!(matches!(err.fault(), Fault::UnsetLocal { name } if name == "x"));
}

#[test]
fn origins_point_into_the_catalog() {
    for case in catalog::catalog() {
        let err = case.invoke().unwrap_err();
        assert!(err.origin().file.ends_with("catalog.rs"), "{}: {}", case.name, err.origin());
    }
}
