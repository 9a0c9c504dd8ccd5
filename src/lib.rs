//! Bindery - binding equivalence and composite cache keys
//!
//! This crate re-exports all layers of the Bindery system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: bindery_binding    — Scalar classification, binding equivalence
//!          bindery_cache      — Composite keys, canonical encoding, memo tables
//! Layer 0: bindery_foundation — Core types (Kind, TypeDescriptor, Value, Error)
//! ```

pub use bindery_binding as binding;
pub use bindery_cache as cache;
pub use bindery_foundation as foundation;
