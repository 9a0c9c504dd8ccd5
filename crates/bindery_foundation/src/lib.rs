//! Type kinds, type descriptors, and dynamic values for Bindery.
//!
//! This crate provides:
//! - [`Kind`] - The closed set of underlying type representations
//! - [`TypeDescriptor`] - Type handles with process-unique identity
//! - [`TypeRegistry`] - Named types and interned composite types
//! - [`Value`] - Dynamic values that are always `Eq + Hash`
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod kind;
pub mod registry;
pub mod types;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use kind::Kind;
pub use registry::TypeRegistry;
pub use types::{TypeDescriptor, TypeId};
pub use value::{OpaqueValue, Value};
