//! Ordered collection with identity membership.
//!
//! This module provides [`Collection`], a mutable element sequence that
//! preserves insertion order and answers membership by element equality.
//! It is the storage layer of the crate: [`DistinctCollection`] composes it
//! and swaps the membership notion for a derived key.
//!
//! # Overview
//!
//! `Collection` behaves as an ordered multiset:
//!
//! - Insertion order is the iteration order
//! - Duplicate elements (by `==`) are permitted
//! - `remove` deletes at most the first matching occurrence
//! - `exists` and `filter` evaluate a predicate in insertion order
//!
//! Small collections are stored inline (up to 8 elements, the same inline
//! threshold used throughout the crate) and spill to the heap beyond that.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity                      |
//! |----------------|---------------------------------|
//! | `new`          | O(1)                            |
//! | `add`          | O(n) (containment report)       |
//! | `remove`       | O(n)                            |
//! | `contains`     | O(n)                            |
//! | `exists`       | O(n), short-circuiting          |
//! | `filter`       | O(n)                            |
//! | `len`          | O(1)                            |
//! | `is_empty`     | O(1)                            |
//! | `iter`         | O(1) to create, O(n) to iterate |
//!
//! # Examples
//!
//! ```rust
//! use orderly::collection::Collection;
//!
//! let mut collection = Collection::new();
//! collection.add("red");
//! collection.add("green");
//! collection.add("red"); // duplicates are permitted
//!
//! assert_eq!(collection.len(), 3);
//! assert!(collection.contains(&"green"));
//!
//! // Removal deletes the first occurrence only
//! collection.remove(&"red");
//! assert_eq!(collection.as_slice(), &["green", "red"]);
//! ```
//!
//! [`DistinctCollection`]: crate::distinct::DistinctCollection

use smallvec::SmallVec;
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

// =============================================================================
// Constants
// =============================================================================

/// Number of elements stored inline before spilling to the heap.
pub(crate) const INLINE_CAPACITY: usize = 8;

// =============================================================================
// Collection Definition
// =============================================================================

/// A mutable, ordered element sequence with equality-based membership.
///
/// The element type is unconstrained for pure storage; operations state their
/// own bounds (`PartialEq` for membership, `Clone` for `filter`).
///
/// # Examples
///
/// ```rust
/// use orderly::collection::Collection;
///
/// let collection: Collection<i32> = (1..=3).collect();
/// assert_eq!(collection.len(), 3);
///
/// let doubled: Vec<i32> = collection.iter().map(|element| element * 2).collect();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
#[derive(Clone)]
pub struct Collection<T> {
    elements: SmallVec<[T; INLINE_CAPACITY]>,
}

// Collections are as thread-compatible as their elements; no synchronization
// is added or required by this crate.
static_assertions::assert_impl_all!(Collection<i32>: Send, Sync, Clone);

impl<T> Collection<T> {
    /// Creates a new empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collection::Collection;
    ///
    /// let collection: Collection<i32> = Collection::new();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: SmallVec::new(),
        }
    }

    /// Returns the number of elements currently held.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collection::Collection;
    ///
    /// let mut collection = Collection::new();
    /// collection.add(1);
    /// collection.add(1);
    /// assert_eq!(collection.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the collection holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements as a slice, in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.elements.as_slice()
    }

    /// Returns a lazy iterator over the elements in insertion order.
    ///
    /// Each call starts a fresh traversal. Mutating the collection while an
    /// iterator is alive is rejected by the borrow checker, so there is no
    /// mutate-during-iterate behavior to define.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collection::Collection;
    ///
    /// let collection: Collection<i32> = vec![3, 1, 2].into();
    /// let elements: Vec<&i32> = collection.iter().collect();
    /// assert_eq!(elements, vec![&3, &1, &2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> CollectionIterator<'_, T> {
        CollectionIterator {
            inner: self.elements.iter(),
        }
    }

    /// Returns `true` if the predicate holds for at least one element.
    ///
    /// Elements are visited in insertion order and evaluation stops at the
    /// first match. A panic in the predicate propagates to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collection::Collection;
    ///
    /// let collection: Collection<i32> = (1..=5).collect();
    /// assert!(collection.exists(|element| element % 4 == 0));
    /// assert!(!collection.exists(|element| *element > 10));
    /// ```
    #[must_use]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().any(predicate)
    }

    /// Appends without the containment report of [`add`](Self::add).
    ///
    /// The distinct layer inserts through this so that containment stays
    /// defined by its own key-based notion rather than element equality.
    #[inline]
    pub(crate) fn append(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Removes and returns the element at `index`.
    ///
    /// `index` must come from a scan of the current elements.
    #[inline]
    pub(crate) fn remove_at(&mut self, index: usize) -> T {
        self.elements.remove(index)
    }
}

impl<T: PartialEq> Collection<T> {
    /// Appends the element and reports whether the collection now contains
    /// it by equality.
    ///
    /// Appending always succeeds; the return value is the re-evaluated
    /// containment check. It is `true` for any element equal to itself and
    /// can only be `false` for non-reflexive `PartialEq` types such as
    /// floating-point `NaN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collection::Collection;
    ///
    /// let mut collection = Collection::new();
    /// assert!(collection.add(7));
    /// assert!(collection.add(7)); // duplicate, still appended
    /// assert_eq!(collection.len(), 2);
    /// ```
    pub fn add(&mut self, element: T) -> bool {
        self.elements.push(element);
        match self.elements.last() {
            Some(inserted) => self.elements.iter().any(|current| current == inserted),
            None => false,
        }
    }

    /// Removes the first occurrence equal to `element`.
    ///
    /// Returns `false` without mutating if no element compares equal.
    /// Otherwise the first matching occurrence is removed and the result
    /// reports whether the element is no longer contained, so removing one
    /// of several equal duplicates removes exactly one occurrence but
    /// reports `false`.
    ///
    /// The query type may be any borrowed form of the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collection::Collection;
    ///
    /// let mut collection = Collection::from(vec![1, 2, 2, 3]);
    ///
    /// assert!(collection.remove(&3));   // gone afterwards
    /// assert!(!collection.remove(&2));  // one occurrence removed, one remains
    /// assert_eq!(collection.as_slice(), &[1, 2]);
    /// assert!(!collection.remove(&99)); // absent: unchanged
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self
            .elements
            .iter()
            .position(|current| current.borrow() == element)
        {
            Some(position) => {
                self.elements.remove(position);
                !self.contains(element)
            }
            None => false,
        }
    }

    /// Returns `true` if some element compares equal to `element`.
    ///
    /// The query type may be any borrowed form of the element type, so a
    /// `Collection<String>` can be searched with a `&str` without
    /// allocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collection::Collection;
    ///
    /// let mut collection = Collection::new();
    /// collection.add("hello".to_string());
    /// assert!(collection.contains("hello"));
    /// assert!(!collection.contains("world"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.elements.iter().any(|current| current.borrow() == element)
    }
}

impl<T: Clone> Collection<T> {
    /// Returns a new collection of the retained elements, in insertion
    /// order.
    ///
    /// The result is the same kind of collection; filtering cannot fail at
    /// this layer because the base collection enforces no insertion
    /// invariant. A panic in the predicate propagates to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::collection::Collection;
    ///
    /// let collection: Collection<i32> = (1..=6).collect();
    /// let even = collection.filter(|element| element % 2 == 0);
    /// assert_eq!(even.as_slice(), &[2, 4, 6]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut result = Self::new();
        for element in self {
            if predicate(element) {
                result.append(element.clone());
            }
        }
        result
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of a [`Collection`], in
/// insertion order.
pub struct CollectionIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for CollectionIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for CollectionIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Owning iterator over the elements of a [`Collection`], in insertion
/// order.
pub struct CollectionIntoIterator<T> {
    inner: smallvec::IntoIter<[T; INLINE_CAPACITY]>,
}

impl<T> Iterator for CollectionIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for CollectionIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Collection<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    /// Seeds a collection from an existing vector, preserving order.
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements: SmallVec::from_vec(elements),
        }
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = CollectionIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        CollectionIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = CollectionIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for Collection<T> {}

impl<T: Hash> Hash for Collection<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the length first to distinguish collections of different
        // lengths, then each element in insertion order.
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Collection<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct CollectionVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> CollectionVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for CollectionVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Collection<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(Collection::from(elements))
    }
}

/// Decoding replaces the element sequence wholesale; the base layer has no
/// insertion invariant to re-run.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Collection<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(CollectionVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
