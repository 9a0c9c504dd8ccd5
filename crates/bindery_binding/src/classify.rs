//! Scalar classification and type equivalence.

use bindery_foundation::TypeDescriptor;

/// Returns true if `t` has a bool, integer, float, complex, or string kind.
///
/// Aggregate, reference, function, and interface kinds are not scalar.
#[must_use]
pub fn is_scalar(t: &TypeDescriptor) -> bool {
    t.kind().is_scalar()
}

/// Returns true if values of `a` and `b` are interchangeable for binding.
///
/// Two types are equivalent when they are the identical type, or when they
/// share a scalar kind. Naming is ignored for scalars: a named `UserId` with
/// kind `int64` is equivalent to the base `int64` and to any other
/// `int64`-kinded type. Non-scalar types must be identical; two struct types
/// with the same fields are still different.
///
/// The relation is reflexive and symmetric. It never relates types of
/// different kinds, so `int32` and `int64` are never equivalent.
#[must_use]
pub fn are_equivalent(a: &TypeDescriptor, b: &TypeDescriptor) -> bool {
    a == b || (a.kind() == b.kind() && is_scalar(a))
}
