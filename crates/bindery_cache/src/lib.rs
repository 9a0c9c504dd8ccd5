//! Composite cache keys and memoization for Bindery values.
//!
//! This crate provides:
//! - [`normalize`] / [`CompositeKey`] - one hashable identity for a list of values
//! - [`CompositeKey::to_bytes`] - deterministic byte encoding of a key
//! - [`MemoCache`] - a bounded memo table keyed by argument lists

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod encode;
pub mod key;
pub mod memo;

pub use config::CacheConfig;
pub use key::{CompositeKey, normalize};
pub use memo::{CacheStats, MemoCache};
