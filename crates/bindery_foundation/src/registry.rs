//! Registry of named and structural types.
//!
//! Named types are defined once per registry and get a fresh identity each.
//! Unnamed composite types (slices, arrays, pointers, maps) are interned, so
//! building the same structure twice yields the same descriptor.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::types::{TypeDescriptor, TypeId};

/// Structural identity of an unnamed composite type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Shape {
    Slice(TypeId),
    Array(TypeId, usize),
    Pointer(TypeId),
    Map(TypeId, TypeId),
}

/// Registry of named types plus interned composite types.
///
/// Not thread-safe for mutation; share a built registry behind `Arc` or
/// hand out the descriptors, which are `Send + Sync`.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    /// Named types in definition order.
    named: Vec<TypeDescriptor>,
    /// Map from name to index into `named`.
    name_to_index: HashMap<Arc<str>, usize>,
    /// Interned unnamed composite types.
    shapes: HashMap<Shape, TypeDescriptor>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    ///
    /// Builtin names (`int64`, `string`, ...) always resolve, even though
    /// they are not counted by [`TypeRegistry::len`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a new named type.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DuplicateType`](crate::ErrorKind::DuplicateType)
    /// if `name` is already defined in this registry or is a builtin name.
    pub fn define(&mut self, name: &str, kind: Kind) -> Result<TypeDescriptor> {
        if self.name_to_index.contains_key(name) || builtin_by_name(name).is_some() {
            return Err(Error::duplicate_type(name));
        }

        let name: Arc<str> = name.into();
        let descriptor = TypeDescriptor::new(name.clone(), kind);
        tracing::debug!(name = %name, %kind, id = descriptor.id().index(), "defined type");

        self.name_to_index.insert(name, self.named.len());
        self.named.push(descriptor.clone());
        Ok(descriptor)
    }

    /// Looks up a type by name, including builtin names.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<TypeDescriptor> {
        self.name_to_index
            .get(name)
            .map(|&idx| self.named[idx].clone())
            .or_else(|| builtin_by_name(name))
    }

    /// Looks up a type by name.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownType`](crate::ErrorKind::UnknownType) if
    /// no such type exists.
    pub fn lookup(&self, name: &str) -> Result<TypeDescriptor> {
        self.get(name).ok_or_else(|| Error::unknown_type(name))
    }

    /// Returns the slice type with the given element type.
    pub fn slice_of(&mut self, elem: &TypeDescriptor) -> TypeDescriptor {
        self.intern(Shape::Slice(elem.id()), || {
            TypeDescriptor::new(format!("[]{elem}"), Kind::Slice)
        })
    }

    /// Returns the array type with the given element type and length.
    pub fn array_of(&mut self, elem: &TypeDescriptor, len: usize) -> TypeDescriptor {
        self.intern(Shape::Array(elem.id(), len), || {
            TypeDescriptor::new(format!("[{len}]{elem}"), Kind::Array)
        })
    }

    /// Returns the pointer type to the given type.
    pub fn pointer_to(&mut self, elem: &TypeDescriptor) -> TypeDescriptor {
        self.intern(Shape::Pointer(elem.id()), || {
            TypeDescriptor::new(format!("*{elem}"), Kind::Pointer)
        })
    }

    /// Returns the map type with the given key and value types.
    pub fn map_of(&mut self, key: &TypeDescriptor, value: &TypeDescriptor) -> TypeDescriptor {
        self.intern(Shape::Map(key.id(), value.id()), || {
            TypeDescriptor::new(format!("map[{key}]{value}"), Kind::Map)
        })
    }

    fn intern(&mut self, shape: Shape, make: impl FnOnce() -> TypeDescriptor) -> TypeDescriptor {
        self.shapes.entry(shape).or_insert_with(make).clone()
    }

    /// Returns the number of named types defined.
    #[must_use]
    pub fn len(&self) -> usize {
        self.named.len()
    }

    /// Returns true if no named types are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.named.is_empty()
    }

    /// Iterates over named types in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.named.iter()
    }
}

fn builtin_by_name(name: &str) -> Option<TypeDescriptor> {
    Kind::ALL
        .into_iter()
        .filter(|kind| kind.is_scalar() || *kind == Kind::Interface)
        .find(|kind| kind.name() == name)
        .map(TypeDescriptor::builtin)
}
