//! Composite keys built from ordered value lists.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use bindery_foundation::Value;

/// Ordered, fixed-length tuple of normalized values.
///
/// Two keys are equal iff they have the same length and are equal at every
/// position. Cloning is O(1).
///
/// Every element is `Eq + Hash`, so any key can be used in a `HashMap`. The
/// only normalization applied is bytes-to-text (see [`normalize`]); all other
/// content is kept as given.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CompositeKey(Arc<[Value]>);

/// Builds a composite key from `values`, preserving order and length.
///
/// Byte sequences that are valid UTF-8 become text, so `b"abc"` and `"abc"`
/// at the same position produce equal keys. Bytes that are not valid UTF-8
/// stay as bytes; they can never equal any text value.
#[must_use]
pub fn normalize(mut values: Vec<Value>) -> CompositeKey {
    values.iter_mut().for_each(bytes_to_text);
    CompositeKey(values.into())
}

fn bytes_to_text(value: &mut Value) {
    let text: Option<Arc<str>> = match value {
        Value::Bytes(bytes) => std::str::from_utf8(bytes).ok().map(Arc::from),
        _ => None,
    };
    if let Some(text) = text {
        *value = Value::String(text);
    }
}

impl CompositeKey {
    /// The key with no elements.
    #[must_use]
    pub fn empty() -> Self {
        normalize(Vec::new())
    }

    /// Builds a key from borrowed values, cloning each one.
    #[must_use]
    pub fn from_slice(values: &[Value]) -> Self {
        values.iter().cloned().collect()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the key has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an element by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }
}

impl Default for CompositeKey {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<Value> for CompositeKey {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        normalize(iter.into_iter().collect())
    }
}

impl From<Vec<Value>> for CompositeKey {
    fn from(values: Vec<Value>) -> Self {
        normalize(values)
    }
}

impl Index<usize> for CompositeKey {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a CompositeKey {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Debug for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item:?}")?;
        }
        write!(f, ")")
    }
}
