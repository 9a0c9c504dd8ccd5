//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Kind, TypeDescriptor, TypeRegistry, Value, and Error.

mod errors;
mod types;
