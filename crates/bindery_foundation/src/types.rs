//! Type descriptors with process-unique identity.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

use crate::kind::Kind;

/// Number of builtin descriptors, one per [`Kind`].
const BUILTIN_COUNT: u64 = Kind::ALL.len() as u64;

/// Next identity handed out to a non-builtin descriptor.
static NEXT_ID: AtomicU64 = AtomicU64::new(BUILTIN_COUNT);

/// Canonical unnamed descriptor for every kind, at index `kind as usize`.
static BUILTINS: LazyLock<Vec<TypeDescriptor>> = LazyLock::new(|| {
    tracing::trace!(count = BUILTIN_COUNT, "initializing builtin type descriptors");
    Kind::ALL
        .iter()
        .zip(0u64..)
        .map(|(&kind, index)| TypeDescriptor::with_id(TypeId(index), kind.name(), kind))
        .collect()
});

/// Identity of a type.
///
/// Builtin descriptors occupy the first identities in [`Kind`] declaration
/// order; every other descriptor gets a fresh identity from a process-wide
/// counter, so identities never repeat within a process.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TypeId(u64);

impl TypeId {
    /// Returns the raw index of this identity.
    #[must_use]
    pub const fn index(self) -> u64 {
        self.0
    }

    /// Returns true if this identity belongs to a builtin descriptor.
    #[must_use]
    pub const fn is_builtin(self) -> bool {
        self.0 < BUILTIN_COUNT
    }

    fn fresh() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

struct TypeInner {
    id: TypeId,
    kind: Kind,
    name: Arc<str>,
}

/// Handle to a type's identity.
///
/// Cloning is O(1). Equality and hashing use the identity alone: two
/// descriptors with the same name and kind but different identities are
/// different types.
#[derive(Clone)]
pub struct TypeDescriptor(Arc<TypeInner>);

impl TypeDescriptor {
    /// Creates a new type with a fresh identity.
    ///
    /// The result is distinct from every other descriptor, including ones
    /// created with the same name and kind.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, kind: Kind) -> Self {
        Self::with_id(TypeId::fresh(), name, kind)
    }

    fn with_id(id: TypeId, name: impl Into<Arc<str>>, kind: Kind) -> Self {
        Self(Arc::new(TypeInner {
            id,
            kind,
            name: name.into(),
        }))
    }

    /// Returns the canonical unnamed descriptor for `kind`.
    ///
    /// `TypeDescriptor::builtin(Kind::Int64)` is the base `int64` type; every
    /// call returns the same identity.
    #[must_use]
    pub fn builtin(kind: Kind) -> Self {
        BUILTINS[kind as usize].clone()
    }

    /// Returns the builtin empty-interface descriptor, which holds any value.
    #[must_use]
    pub fn any() -> Self {
        Self::builtin(Kind::Interface)
    }

    /// Returns the identity of this type.
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.0.id
    }

    /// Returns the underlying kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.0.kind
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns true if this is one of the builtin descriptors.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        self.0.id.is_builtin()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}#{})", self.0.name, self.0.kind, self.0.id.0)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}
