//! Scalar classification and binding equivalence.
//!
//! Answers one question for schema and row-binding layers: can a value of
//! type A be copied into a field of type B without conversion logic?
//!
//! - [`is_scalar`] / [`are_equivalent`] - infallible predicates
//! - [`ensure_equivalent`] / [`ensure_value_bindable`] - the same checks as
//!   [`Result`](bindery_foundation::Result)s for callers that propagate errors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bind;
pub mod classify;

pub use bind::{ensure_equivalent, ensure_value_bindable, value_binds_to};
pub use classify::{are_equivalent, is_scalar};
