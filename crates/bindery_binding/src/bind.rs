//! Fallible binding checks.
//!
//! These wrap the classifier for callers that want an error naming the
//! offending types rather than a bare `false`.

use bindery_foundation::{Error, Kind, Result, TypeDescriptor, Value};

use crate::classify::are_equivalent;

/// Checks that a `source` typed value can populate a `dest` field.
///
/// # Errors
///
/// Returns [`ErrorKind::TypeMismatch`](bindery_foundation::ErrorKind::TypeMismatch)
/// naming both types if they are not [equivalent](are_equivalent).
pub fn ensure_equivalent(dest: &TypeDescriptor, source: &TypeDescriptor) -> Result<()> {
    if are_equivalent(dest, source) {
        return Ok(());
    }
    tracing::debug!(dest = %dest, source = %source, "type binding rejected");
    Err(Error::type_mismatch(dest.name(), source.name()))
}

/// Returns true if `value` can populate a field of type `dest` as is.
///
/// - an interface field accepts every value
/// - nil fits pointer, slice, map, interface, func, and chan fields
/// - opaque content reporting [`Kind::Other`] fits any non-scalar field
/// - an integer fits any integer kind of the same signedness whose range
///   holds it, so `Int(7)` fits `int8` but `Int(300)` does not
/// - a float fits either float kind, and a complex value either complex kind
/// - everything else must have exactly the field's kind
#[must_use]
pub fn value_binds_to(value: &Value, dest: &TypeDescriptor) -> bool {
    let dest_kind = dest.kind();
    if dest_kind == Kind::Interface {
        return true;
    }
    match value {
        Value::Nil => dest_kind.is_nillable(),
        Value::Int(n) => signed_fits(*n, dest_kind),
        Value::Uint(n) => unsigned_fits(*n, dest_kind),
        Value::Float(_) => matches!(dest_kind, Kind::Float32 | Kind::Float64),
        Value::Complex { .. } => matches!(dest_kind, Kind::Complex64 | Kind::Complex128),
        Value::Opaque(o) if o.kind() == Kind::Other => !dest_kind.is_scalar(),
        other => other.kind() == dest_kind,
    }
}

fn signed_fits(n: i64, kind: Kind) -> bool {
    match kind {
        Kind::Int => isize::try_from(n).is_ok(),
        Kind::Int8 => i8::try_from(n).is_ok(),
        Kind::Int16 => i16::try_from(n).is_ok(),
        Kind::Int32 => i32::try_from(n).is_ok(),
        Kind::Int64 => true,
        _ => false,
    }
}

fn unsigned_fits(n: u64, kind: Kind) -> bool {
    match kind {
        Kind::Uint | Kind::Uintptr => usize::try_from(n).is_ok(),
        Kind::Uint8 => u8::try_from(n).is_ok(),
        Kind::Uint16 => u16::try_from(n).is_ok(),
        Kind::Uint32 => u32::try_from(n).is_ok(),
        Kind::Uint64 => true,
        _ => false,
    }
}

/// Checks that `value` can populate a field of type `dest`.
///
/// # Errors
///
/// Returns [`ErrorKind::KindMismatch`](bindery_foundation::ErrorKind::KindMismatch)
/// if [`value_binds_to`] is false.
pub fn ensure_value_bindable(value: &Value, dest: &TypeDescriptor) -> Result<()> {
    if value_binds_to(value, dest) {
        return Ok(());
    }
    tracing::debug!(dest = %dest, value = ?value, "value binding rejected");
    Err(Error::kind_mismatch(dest.kind(), value.kind()))
}
