//! Deterministic byte encoding of composite keys.
//!
//! Keys are encoded as a MessagePack array of tagged elements. Equal keys
//! always produce equal bytes, which makes the encoding suitable as a key for
//! external stores that only accept byte strings.

use serde::Serialize;

use bindery_foundation::{Error, Result, Value};

use crate::key::CompositeKey;

/// Borrowed, serializable view of one key element.
#[derive(Serialize)]
enum Part<'a> {
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Complex(f64, f64),
    String(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> Part<'a> {
    fn from_value(value: &'a Value) -> Result<Self> {
        Ok(match value {
            Value::Nil => Self::Nil,
            Value::Bool(b) => Self::Bool(*b),
            Value::Int(n) => Self::Int(*n),
            Value::Uint(n) => Self::Uint(*n),
            Value::Float(n) => Self::Float(positive_zero(*n)),
            Value::Complex { re, im } => Self::Complex(positive_zero(*re), positive_zero(*im)),
            Value::String(s) => Self::String(s),
            Value::Bytes(b) => Self::Bytes(b),
            Value::Opaque(o) => return Err(Error::not_encodable(o.type_name())),
        })
    }
}

// Equal keys must encode the same, and `-0.0 == 0.0` as a key element.
fn positive_zero(f: f64) -> f64 {
    if f == 0.0 { 0.0 } else { f }
}

impl CompositeKey {
    /// Encodes this key as deterministic bytes.
    ///
    /// Elements are tagged by variant, so `Int(1)` and `Uint(1)` encode
    /// differently.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NotEncodable`](bindery_foundation::ErrorKind::NotEncodable)
    /// if the key holds opaque content, or
    /// [`ErrorKind::Encoding`](bindery_foundation::ErrorKind::Encoding) if
    /// the encoder fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let parts = self
            .iter()
            .map(Part::from_value)
            .collect::<Result<Vec<_>>>()?;
        rmp_serde::to_vec(&parts).map_err(|e| Error::encoding(e.to_string()))
    }
}
