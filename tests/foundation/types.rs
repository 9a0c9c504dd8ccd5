//! Integration tests for kinds, type descriptors, and the type registry

use bindery_foundation::{Kind, TypeDescriptor, TypeRegistry};
use std::collections::HashSet;

#[test]
fn every_builtin_has_its_kind() {
    for kind in Kind::ALL {
        let t = TypeDescriptor::builtin(kind);
        assert_eq!(t.kind(), kind);
        assert_eq!(t.name(), kind.name());
        assert!(t.is_builtin());
    }
}

#[test]
fn builtin_identities_are_unique() {
    let ids: HashSet<_> = Kind::ALL
        .into_iter()
        .map(|k| TypeDescriptor::builtin(k).id())
        .collect();
    assert_eq!(ids.len(), Kind::ALL.len());
}

#[test]
fn descriptors_hash_by_identity() {
    let a = TypeDescriptor::new("Point", Kind::Struct);
    let b = TypeDescriptor::new("Point", Kind::Struct);

    let mut set = HashSet::new();
    set.insert(a.clone());
    assert!(set.contains(&a));
    assert!(!set.contains(&b));
}

#[test]
fn registry_round_trip() {
    let mut registry = TypeRegistry::new();
    let user_id = registry.define("UserId", Kind::Int64).unwrap();
    let point = registry.define("Point", Kind::Struct).unwrap();

    assert_eq!(registry.lookup("UserId").unwrap(), user_id);
    assert_eq!(registry.lookup("Point").unwrap(), point);
    assert_eq!(
        registry.lookup("int64").unwrap(),
        TypeDescriptor::builtin(Kind::Int64)
    );
    assert!(registry.lookup("Vector").is_err());
}

#[test]
fn registry_interns_nested_shapes() {
    let mut registry = TypeRegistry::new();
    let string = TypeDescriptor::builtin(Kind::String);
    let inner = registry.slice_of(&string);
    let outer_a = registry.pointer_to(&inner);
    let inner_again = registry.slice_of(&string);
    let outer_b = registry.pointer_to(&inner_again);

    assert_eq!(outer_a, outer_b);
    assert_eq!(outer_a.name(), "*[]string");
}

#[test]
fn registries_can_be_shared_across_threads() {
    let mut registry = TypeRegistry::new();
    registry.define("UserId", Kind::Int64).unwrap();
    let registry = std::sync::Arc::new(registry);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            std::thread::spawn(move || registry.get("UserId").map(|t| t.id()))
        })
        .collect();
    let ids: HashSet<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(ids.len(), 1);
}
