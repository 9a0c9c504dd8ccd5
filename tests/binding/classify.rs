//! Integration tests for scalar classification and type equivalence

use bindery_binding::{are_equivalent, ensure_equivalent, is_scalar};
use bindery_foundation::{ErrorKind, Kind, TypeDescriptor, TypeRegistry};

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.define("UserId", Kind::Int64).unwrap();
    registry.define("Timestamp", Kind::Int64).unwrap();
    registry.define("Email", Kind::String).unwrap();
    registry.define("Flags", Kind::Uint32).unwrap();
    registry.define("User", Kind::Struct).unwrap();
    registry.define("Account", Kind::Struct).unwrap();
    registry
}

// =============================================================================
// Scalar Classification
// =============================================================================

#[test]
fn scalar_kinds_classify_as_scalar() {
    let registry = registry();
    for name in ["UserId", "Timestamp", "Email", "Flags", "bool", "complex64", "uintptr"] {
        assert!(is_scalar(&registry.lookup(name).unwrap()), "{name}");
    }
}

#[test]
fn composite_kinds_classify_as_non_scalar() {
    let mut registry = registry();
    let user = registry.lookup("User").unwrap();
    let user_ptr = registry.pointer_to(&user);
    let users = registry.slice_of(&user);
    let email = registry.lookup("Email").unwrap();
    let by_email = registry.map_of(&email, &user);

    for t in [&user, &user_ptr, &users, &by_email] {
        assert!(!is_scalar(t), "{t}");
    }
    assert!(!is_scalar(&TypeDescriptor::any()));
    assert!(!is_scalar(&TypeDescriptor::builtin(Kind::Func)));
}

// =============================================================================
// Equivalence
// =============================================================================

#[test]
fn named_int64_equivalent_to_base_int64() {
    let registry = registry();
    let user_id = registry.lookup("UserId").unwrap();
    assert!(are_equivalent(&user_id, &TypeDescriptor::builtin(Kind::Int64)));
}

#[test]
fn unrelated_int64_types_are_equivalent() {
    // Kind-based and name-agnostic: two domain identifiers with the same
    // underlying kind are interchangeable.
    let registry = registry();
    let user_id = registry.lookup("UserId").unwrap();
    let timestamp = registry.lookup("Timestamp").unwrap();
    assert!(are_equivalent(&user_id, &timestamp));
    assert!(are_equivalent(&timestamp, &user_id));
}

#[test]
fn named_string_equivalent_to_base_string() {
    let registry = registry();
    let email = registry.lookup("Email").unwrap();
    assert!(are_equivalent(&email, &registry.lookup("string").unwrap()));
}

#[test]
fn different_kinds_never_equivalent() {
    let registry = registry();
    let user_id = registry.lookup("UserId").unwrap();
    assert!(!are_equivalent(&user_id, &TypeDescriptor::builtin(Kind::Int32)));
    assert!(!are_equivalent(&user_id, &registry.lookup("Flags").unwrap()));
    assert!(!are_equivalent(&user_id, &registry.lookup("Email").unwrap()));
}

#[test]
fn distinct_structs_never_equivalent() {
    let registry = registry();
    let user = registry.lookup("User").unwrap();
    let account = registry.lookup("Account").unwrap();
    assert!(are_equivalent(&user, &user));
    assert!(!are_equivalent(&user, &account));
}

#[test]
fn ensure_equivalent_error() {
    let registry = registry();
    let err = ensure_equivalent(
        &registry.lookup("User").unwrap(),
        &registry.lookup("Account").unwrap(),
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    assert_eq!(err.to_string(), "type mismatch: expected User, got Account");
}
