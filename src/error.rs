//! Error types for the collection hierarchy.
//!
//! The only failure the library reports at runtime is a distinct-key
//! collision. Configuration mistakes that the original reflection-based
//! design reported dynamically (a missing accessor, an element of the wrong
//! type) are compile errors here: the accessor is an ordinary function whose
//! signature guarantees both that it exists and that it accepts the element
//! type.
//!
//! Errors are returned synchronously to the caller; nothing is logged,
//! swallowed, or retried internally.

/// Represents a rejected insertion into a distinct collection.
///
/// Raised when the derived key of the element being inserted compares equal
/// to the key of an element already stored. The collection is left in its
/// prior state; the failed element is not inserted.
///
/// `index` is the position (in insertion order) of the element whose key
/// collided, which is well defined because a distinct collection holds at
/// most one element per key.
///
/// # Examples
///
/// ```rust
/// use orderly::error::DuplicateKeyError;
///
/// let error = DuplicateKeyError { index: 2 };
/// assert_eq!(
///     format!("{}", error),
///     "an element with an equal distinct key is already stored at index 2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyError {
    /// Insertion-order position of the already-stored element whose key
    /// collided with the rejected element.
    pub index: usize,
}

impl std::fmt::Display for DuplicateKeyError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "an element with an equal distinct key is already stored at index {}",
            self.index
        )
    }
}

impl std::error::Error for DuplicateKeyError {}
