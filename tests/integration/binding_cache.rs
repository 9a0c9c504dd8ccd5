//! A binding layer that checks field types and memoizes per-argument results.

use bindery::binding::{are_equivalent, ensure_value_bindable};
use bindery::cache::{CacheConfig, MemoCache};
use bindery::foundation::{Kind, Result, TypeDescriptor, TypeRegistry, Value};

struct Field {
    name: &'static str,
    ty: TypeDescriptor,
}

/// Copies the values whose field types line up and memoizes the projection
/// by its argument values.
fn project(
    cache: &mut MemoCache<Vec<Value>>,
    source: &[Field],
    dest: &[Field],
    row: &[Value],
) -> Result<Vec<Value>> {
    cache.try_get_or_insert_with(row.to_vec(), || {
        let mut out = Vec::new();
        for (field, value) in source.iter().zip(row) {
            if let Some(target) = dest.iter().find(|d| d.name == field.name) {
                if are_equivalent(&target.ty, &field.ty) {
                    ensure_value_bindable(value, &target.ty)?;
                    out.push(value.clone());
                }
            }
        }
        Ok(out)
    })
}

#[test]
fn project_rows_between_schemas() {
    let mut registry = TypeRegistry::new();
    let user_id = registry.define("UserId", Kind::Int64).unwrap();
    let email = registry.define("Email", Kind::String).unwrap();
    let profile = registry.define("Profile", Kind::Struct).unwrap();
    let other_profile = registry.define("ProfileV2", Kind::Struct).unwrap();

    let source = [
        Field {
            name: "id",
            ty: user_id,
        },
        Field {
            name: "email",
            ty: email,
        },
        Field {
            name: "profile",
            ty: profile,
        },
    ];
    let dest = [
        Field {
            name: "id",
            ty: TypeDescriptor::builtin(Kind::Int64),
        },
        Field {
            name: "email",
            ty: TypeDescriptor::builtin(Kind::String),
        },
        Field {
            name: "profile",
            ty: other_profile,
        },
    ];

    let mut cache = MemoCache::new(CacheConfig::default());
    let row = [Value::Int(1), Value::from("a@example.com"), Value::Nil];
    let projected = project(&mut cache, &source, &dest, &row).unwrap();
    assert_eq!(projected, vec![Value::Int(1), Value::from("a@example.com")]);

    // Same content with the email as raw bytes hits the cache.
    let bytes_row = [Value::Int(1), Value::from(b"a@example.com".to_vec()), Value::Nil];
    let again = project(&mut cache, &source, &dest, &bytes_row).unwrap();
    assert_eq!(again, projected);
    assert_eq!(cache.stats().hits, 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn bad_value_is_not_memoized() {
    let source = [Field {
        name: "id",
        ty: TypeDescriptor::builtin(Kind::Int64),
    }];
    let dest = [Field {
        name: "id",
        ty: TypeDescriptor::builtin(Kind::Int64),
    }];
    let mut cache = MemoCache::default();

    assert!(project(&mut cache, &source, &dest, &[Value::from("one")]).is_err());
    assert!(cache.is_empty());
    assert!(!cache.contains(&[Value::from("one")]));
}
