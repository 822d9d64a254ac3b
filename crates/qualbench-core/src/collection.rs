//! Borrowed vs owned return values over the same fields.
//!
//! [`CollectionHolder`] stores a five-element sequence and a short label.
//! Its accessors return the same content five ways:
//!
//! | Accessor | Returns | Copies |
//! |----------|---------|--------|
//! | [`data`](CollectionHolder::data) | `&[f64]` | no |
//! | [`data_copy`](CollectionHolder::data_copy) | `Vec<f64>` | yes |
//! | [`data_const_copy`](CollectionHolder::data_const_copy) | `ReadOnly<Vec<f64>>` | yes |
//! | [`name`](CollectionHolder::name) | `&str` | no |
//! | [`name_copy`](CollectionHolder::name_copy) | `String` | yes |

use std::ops::Deref;

/// Sequence every default holder starts with.
pub const DEFAULT_DATA: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

/// Label every default holder starts with.
pub const DEFAULT_NAME: &str = "test";

/// An owned value the holder of which may only read.
///
/// Only [`Deref`] is implemented, never `DerefMut`, so the wrapped value
/// cannot be mutated in place. [`into_inner`](Self::into_inner) gives the
/// value back by move.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadOnly<T>(T);

impl<T> ReadOnly<T> {
    /// Wrap a value.
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Unwrap into the owned value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ReadOnly<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

/// A fixed sequence and label, never mutated after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionHolder {
    data: Vec<f64>,
    name: String,
}

impl CollectionHolder {
    /// Create a holder over [`DEFAULT_DATA`] and [`DEFAULT_NAME`].
    pub fn new() -> Self {
        Self::with_contents(DEFAULT_DATA.to_vec(), DEFAULT_NAME)
    }

    /// Create a holder over arbitrary contents.
    pub fn with_contents(data: Vec<f64>, name: impl Into<String>) -> Self {
        Self {
            data,
            name: name.into(),
        }
    }

    /// Borrow the sequence.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Copy the sequence into a new `Vec` the caller owns.
    pub fn data_copy(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Copy the sequence into a [`ReadOnly`] wrapper.
    pub fn data_const_copy(&self) -> ReadOnly<Vec<f64>> {
        ReadOnly::new(self.data.clone())
    }

    /// Borrow the label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Copy the label into a new `String` the caller owns.
    pub fn name_copy(&self) -> String {
        self.name.clone()
    }
}

impl Default for CollectionHolder {
    fn default() -> Self {
        Self::new()
    }
}
