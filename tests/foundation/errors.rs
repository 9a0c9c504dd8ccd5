//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use bindery_foundation::{Error, ErrorContext, ErrorKind, Kind, TypeRegistry};

#[test]
fn error_duplicate_type() {
    let mut registry = TypeRegistry::new();
    registry.define("UserId", Kind::Int64).unwrap();
    let err = registry.define("UserId", Kind::Int64).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateType(_)));
    assert!(format!("{err}").contains("UserId"));
}

#[test]
fn error_unknown_type() {
    let err = TypeRegistry::new().lookup("Nope").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownType(_)));
    assert_eq!(format!("{err}"), "unknown type: Nope");
}

#[test]
fn error_display_type_mismatch() {
    let err = Error::type_mismatch("Email", "UserId");
    assert_eq!(
        format!("{err}"),
        "type mismatch: expected Email, got UserId"
    );
}

#[test]
fn error_context_display() {
    let ctx = ErrorContext::new()
        .with_source("users.email")
        .with_frame("bind row")
        .with_frame("load users");
    let text = format!("{ctx}");
    assert!(text.starts_with("at users.email"));
    assert!(text.contains("  in bind row"));
    assert!(text.contains("  in load users"));
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::encoding("boom"));
}
