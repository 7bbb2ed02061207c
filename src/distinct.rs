//! Uniqueness by derived key on top of [`Collection`] storage.
//!
//! This module provides [`DistinctCollection`], an insertion-ordered
//! collection that admits at most one element per *distinct key*. The key is
//! not the element itself: it is derived by an accessor function supplied at
//! construction, so two structurally different elements collide when their
//! keys compare equal.
//!
//! # Overview
//!
//! - Membership (`contains`, `remove`) is decided by key equality, never by
//!   element equality
//! - `add` rejects an element whose key is already present and leaves the
//!   collection untouched
//! - The accessor is ordinary instance state fixed for the collection's
//!   lifetime; its signature guarantees at compile time both that it exists
//!   and that it accepts the element type, so there is no runtime
//!   configuration or element-type check
//! - The duplicate scan recomputes keys linearly on every membership check;
//!   no key index is maintained
//!
//! # Construction routes
//!
//! Supply a closure (or fn pointer) per collection, or implement
//! [`Distinct`] once for element types with a canonical key and use
//! [`KeyedCollection`]:
//!
//! ```rust
//! use orderly::distinct::{Distinct, DistinctCollection, KeyedCollection};
//!
//! // Route 1: accessor injected at the construction site.
//! let mut by_initial = DistinctCollection::new(|word: &&str| word.chars().next());
//! assert!(by_initial.add("alpha").is_ok());
//! assert!(by_initial.add("atlas").is_err()); // same initial, same key
//!
//! // Route 2: the element type carries its key.
//! #[derive(Debug, Clone, PartialEq, Eq)]
//! struct Person {
//!     id: u32,
//!     name: String,
//! }
//!
//! impl Distinct for Person {
//!     type Key = u32;
//!
//!     fn distinct_key(&self) -> u32 {
//!         self.id
//!     }
//! }
//!
//! let mut people = KeyedCollection::of();
//! assert!(people.add(Person { id: 1, name: "Ada".to_string() }).is_ok());
//! assert!(people.add(Person { id: 1, name: "Grace".to_string() }).is_err());
//! ```
//!
//! # Known limitation
//!
//! The collection never re-reads keys it has already admitted. If an
//! element's derived key changes after insertion (through interior
//! mutability or an accessor reading external state), the uniqueness
//! invariant can be violated silently. Restoring from a serialized payload
//! without validation ([`DistinctCollection::restore`],
//! [`DistinctCollectionSeed::trusted`]) can do the same by design.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use crate::collection::{Collection, CollectionIntoIterator, CollectionIterator};
use crate::error::DuplicateKeyError;

// =============================================================================
// Distinct Trait
// =============================================================================

/// An element type with a canonical distinguishing key.
///
/// Implementing `Distinct` lets [`KeyedCollection`] derive its accessor from
/// the type instead of taking a closure at every construction site.
///
/// # Examples
///
/// ```rust
/// use orderly::distinct::{Distinct, KeyedCollection};
///
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Device {
///     serial: String,
///     label: String,
/// }
///
/// impl Distinct for Device {
///     type Key = String;
///
///     fn distinct_key(&self) -> String {
///         self.serial.clone()
///     }
/// }
///
/// let mut devices = KeyedCollection::of();
/// assert!(devices
///     .add(Device { serial: "A-1".to_string(), label: "printer".to_string() })
///     .is_ok());
/// assert!(devices
///     .add(Device { serial: "A-1".to_string(), label: "scanner".to_string() })
///     .is_err());
/// ```
pub trait Distinct {
    /// The derived key over which uniqueness is enforced.
    type Key: PartialEq;

    /// Returns the distinguishing key of this element.
    fn distinct_key(&self) -> Self::Key;
}

/// A [`DistinctCollection`] whose accessor is derived from the element
/// type's [`Distinct`] implementation.
pub type KeyedCollection<T> =
    DistinctCollection<T, <T as Distinct>::Key, fn(&T) -> <T as Distinct>::Key>;

// =============================================================================
// DistinctCollection Definition
// =============================================================================

/// An insertion-ordered collection holding at most one element per derived
/// key.
///
/// `DistinctCollection` composes a [`Collection`] for storage and replaces
/// its membership notion: an element is "contained" when some stored
/// element's key equals its key. The accessor `F` and the key type `K` are
/// configuration fixed at construction.
///
/// # Time Complexity
///
/// Every membership decision recomputes stored keys with the configured
/// accessor, so `add`, `contains`, `remove`, and the key lookups are O(n)
/// accessor invocations. `len`, `is_empty`, and iteration match
/// [`Collection`].
///
/// # Examples
///
/// ```rust
/// use orderly::distinct::DistinctCollection;
///
/// let mut collection = DistinctCollection::new(|element: &i32| element / 10);
/// assert!(collection.add(10).is_ok());
/// assert!(collection.add(25).is_ok());
///
/// // 11 falls into the same tens bucket as 10.
/// let error = collection.add(11).unwrap_err();
/// assert_eq!(error.index, 0);
/// assert_eq!(collection.len(), 2);
/// ```
pub struct DistinctCollection<T, K, F = fn(&T) -> K> {
    elements: Collection<T>,
    key: F,
    marker: PhantomData<fn() -> K>,
}

// Thread compatibility follows the element and accessor types.
static_assertions::assert_impl_all!(DistinctCollection<i32, i32>: Send, Sync, Clone);

impl<T, K, F> DistinctCollection<T, K, F>
where
    F: Fn(&T) -> K,
    K: PartialEq,
{
    /// Creates an empty collection with the given key accessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::distinct::DistinctCollection;
    ///
    /// let collection = DistinctCollection::new(|word: &String| word.len());
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new(key: F) -> Self {
        Self {
            elements: Collection::new(),
            key,
            marker: PhantomData,
        }
    }

    /// Creates a collection seeded with `elements`, inserted in order
    /// through the same validated path as [`add`](Self::add).
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateKeyError`] if two seed elements collide on key;
    /// the position refers to the element already admitted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::distinct::DistinctCollection;
    ///
    /// let collection =
    ///     DistinctCollection::from_elements(|element: &i32| element % 10, vec![1, 12, 23]);
    /// assert_eq!(collection.unwrap().len(), 3);
    ///
    /// let collision =
    ///     DistinctCollection::from_elements(|element: &i32| element % 10, vec![1, 11]);
    /// assert_eq!(collision.unwrap_err().index, 0);
    /// ```
    pub fn from_elements<I>(key: F, elements: I) -> Result<Self, DuplicateKeyError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut collection = Self::new(key);
        for element in elements {
            collection.add(element)?;
        }
        Ok(collection)
    }

    /// Appends the element if its key is not already present.
    ///
    /// On success the return value reports containment after insertion,
    /// re-evaluated through key equality exactly as [`Collection::add`]
    /// re-evaluates element equality (`true` unless the key type's
    /// `PartialEq` is non-reflexive).
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateKeyError`] without mutating if a stored element's
    /// key equals the new element's key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::distinct::DistinctCollection;
    ///
    /// let mut words = DistinctCollection::new(|word: &String| word.len());
    /// assert!(words.add("alpha".to_string()).is_ok());
    /// assert!(words.add("omega".to_string()).is_err()); // same length
    /// assert_eq!(words.len(), 1);
    /// ```
    pub fn add(&mut self, element: T) -> Result<bool, DuplicateKeyError> {
        let key = (self.key)(&element);
        if let Some(index) = Self::scan(&self.elements, &self.key, &key) {
            return Err(DuplicateKeyError { index });
        }
        self.elements.append(element);
        Ok(Self::scan(&self.elements, &self.key, &key).is_some())
    }

    /// Returns `true` if some stored element's key equals `element`'s key.
    ///
    /// The argument does not need to be a stored element; only its derived
    /// key participates. Passing a value of another type is a compile
    /// error:
    ///
    /// ```compile_fail
    /// use orderly::distinct::DistinctCollection;
    ///
    /// let collection = DistinctCollection::new(|element: &i32| *element);
    /// collection.contains(&"not-an-integer");
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::distinct::DistinctCollection;
    ///
    /// let mut collection = DistinctCollection::new(|element: &i32| element / 10);
    /// assert!(collection.add(10).is_ok());
    ///
    /// assert!(collection.contains(&10));
    /// assert!(collection.contains(&15)); // same tens bucket
    /// assert!(!collection.contains(&20));
    /// ```
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        let key = (self.key)(element);
        Self::scan(&self.elements, &self.key, &key).is_some()
    }

    /// Removes the stored element sharing `element`'s key.
    ///
    /// Removal mirrors [`contains`](Self::contains): membership is
    /// key-based, so the argument only has to carry the key. Returns
    /// `false` without mutating when no stored element shares the key;
    /// otherwise the (by invariant unique) key-matching element is removed
    /// and the result reports that the key is gone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::distinct::DistinctCollection;
    ///
    /// let mut collection = DistinctCollection::new(|element: &i32| element / 10);
    /// assert!(collection.add(10).is_ok());
    ///
    /// // 15 carries the same key, so it names the stored element 10.
    /// assert!(collection.remove(&15));
    /// assert!(collection.is_empty());
    /// assert!(!collection.remove(&15));
    /// ```
    pub fn remove(&mut self, element: &T) -> bool {
        let key = (self.key)(element);
        match Self::scan(&self.elements, &self.key, &key) {
            Some(position) => {
                self.elements.remove_at(position);
                Self::scan(&self.elements, &self.key, &key).is_none()
            }
            None => false,
        }
    }

    /// Returns `true` if some stored element derives a key equal to `key`.
    ///
    /// The query type may be any borrowed form of the key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::distinct::DistinctCollection;
    ///
    /// let mut words = DistinctCollection::new(|word: &String| word.clone());
    /// assert!(words.add("alpha".to_string()).is_ok());
    ///
    /// assert!(words.contains_key("alpha")); // &str query, no allocation
    /// assert!(!words.contains_key("omega"));
    /// ```
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.elements
            .iter()
            .any(|current| (self.key)(current).borrow() == key)
    }

    /// Returns a reference to the stored element deriving a key equal to
    /// `key`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::distinct::DistinctCollection;
    ///
    /// let mut collection = DistinctCollection::new(|element: &(u32, &str)| element.0);
    /// assert!(collection.add((1, "one")).is_ok());
    ///
    /// assert_eq!(collection.find(&1), Some(&(1, "one")));
    /// assert_eq!(collection.find(&2), None);
    /// ```
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Option<&T>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let position = self
            .elements
            .iter()
            .position(|current| (self.key)(current).borrow() == key)?;
        self.elements.as_slice().get(position)
    }

    /// Removes and returns the stored element deriving a key equal to
    /// `key`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::distinct::DistinctCollection;
    ///
    /// let mut collection = DistinctCollection::new(|element: &(u32, &str)| element.0);
    /// assert!(collection.add((1, "one")).is_ok());
    ///
    /// assert_eq!(collection.remove_by_key(&1), Some((1, "one")));
    /// assert_eq!(collection.remove_by_key(&1), None);
    /// ```
    pub fn remove_by_key<Q>(&mut self, key: &Q) -> Option<T>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let position = self
            .elements
            .iter()
            .position(|current| (self.key)(current).borrow() == key)?;
        Some(self.elements.remove_at(position))
    }

    /// Returns a new collection with the same accessor configuration and
    /// the retained elements, in insertion order.
    ///
    /// The result is built through the validated insertion path, so the
    /// same-kind guarantee includes the uniqueness invariant.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateKeyError`] if two retained elements collide on
    /// key, which is only reachable when the invariant was previously
    /// bypassed (see [`restore`](Self::restore)).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::distinct::DistinctCollection;
    ///
    /// let collection =
    ///     DistinctCollection::from_elements(|element: &i32| *element, vec![1, 2, 3, 4]).unwrap();
    /// let even = collection.filter(|element| element % 2 == 0).unwrap();
    /// assert_eq!(even.as_slice(), &[2, 4]);
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> Result<Self, DuplicateKeyError>
    where
        T: Clone,
        F: Clone,
        P: FnMut(&T) -> bool,
    {
        let mut result = self.clone_empty();
        for element in self.iter() {
            if predicate(element) {
                result.add(element.clone())?;
            }
        }
        Ok(result)
    }

    /// Returns an empty collection carrying the same accessor
    /// configuration.
    ///
    /// This is the factory behind [`filter`](Self::filter): any operation
    /// that needs "a new collection of the same kind" starts here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::distinct::DistinctCollection;
    ///
    /// let collection =
    ///     DistinctCollection::from_elements(|element: &i32| *element, vec![1, 2]).unwrap();
    /// let mut empty = collection.clone_empty();
    /// assert!(empty.is_empty());
    /// assert!(empty.add(1).is_ok()); // fresh state, same accessor
    /// ```
    #[must_use]
    pub fn clone_empty(&self) -> Self
    where
        F: Clone,
    {
        Self::new(self.key.clone())
    }

    /// Replaces the element sequence wholesale, skipping all validation.
    ///
    /// This is the trusted-source restore path: the payload is admitted
    /// verbatim, so a sequence with colliding keys leaves the collection
    /// with its uniqueness invariant violated until elements are removed or
    /// the collection is rebuilt. Prefer
    /// [`restore_checked`](Self::restore_checked) for untrusted input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::distinct::DistinctCollection;
    ///
    /// let mut collection = DistinctCollection::new(|element: &i32| *element);
    /// collection.restore(vec![7, 7]);
    /// assert_eq!(collection.len(), 2); // invariant knowingly bypassed
    /// ```
    pub fn restore<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.elements = elements.into_iter().collect();
    }

    /// Replaces the element sequence, routing every element through the
    /// validated insertion path.
    ///
    /// Replacement is atomic: on error the collection keeps its prior
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateKeyError`] if two elements of the payload collide
    /// on key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::distinct::DistinctCollection;
    ///
    /// let mut collection =
    ///     DistinctCollection::from_elements(|element: &i32| *element, vec![1]).unwrap();
    ///
    /// assert!(collection.restore_checked(vec![7, 7]).is_err());
    /// assert_eq!(collection.as_slice(), &[1]); // prior state kept
    ///
    /// assert!(collection.restore_checked(vec![7, 8]).is_ok());
    /// assert_eq!(collection.as_slice(), &[7, 8]);
    /// ```
    pub fn restore_checked<I>(&mut self, elements: I) -> Result<(), DuplicateKeyError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut replacement = Collection::new();
        for element in elements {
            let key = (self.key)(&element);
            if let Some(index) = Self::scan(&replacement, &self.key, &key) {
                return Err(DuplicateKeyError { index });
            }
            replacement.append(element);
        }
        self.elements = replacement;
        Ok(())
    }

    /// Linear scan for a stored element whose derived key equals `target`.
    fn scan(elements: &Collection<T>, key: &F, target: &K) -> Option<usize> {
        elements.iter().position(|current| key(current) == *target)
    }
}

impl<T, K, F> DistinctCollection<T, K, F> {
    /// Returns the number of elements currently held.
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

    /// Returns a read-only view of the backing [`Collection`].
    ///
    /// Mutation stays behind the validated operations of this type.
    #[inline]
    #[must_use]
    pub fn as_collection(&self) -> &Collection<T> {
        &self.elements
    }

    /// Returns a lazy iterator over the elements in insertion order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> CollectionIterator<'_, T> {
        self.elements.iter()
    }

    /// Returns `true` if the predicate holds for at least one element,
    /// evaluated in insertion order with short-circuiting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::distinct::DistinctCollection;
    ///
    /// let collection =
    ///     DistinctCollection::from_elements(|element: &i32| *element, vec![1, 2, 3]).unwrap();
    /// assert!(collection.exists(|element| *element > 2));
    /// ```
    #[must_use]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.exists(predicate)
    }
}

// =============================================================================
// Distinct-Trait Constructors
// =============================================================================

impl<T: Distinct> KeyedCollection<T> {
    /// Creates an empty collection keyed by the element type's
    /// [`Distinct`] implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::distinct::{Distinct, KeyedCollection};
    ///
    /// #[derive(Debug, Clone, PartialEq, Eq)]
    /// struct Person {
    ///     id: u32,
    ///     name: String,
    /// }
    ///
    /// impl Distinct for Person {
    ///     type Key = u32;
    ///
    ///     fn distinct_key(&self) -> u32 {
    ///         self.id
    ///     }
    /// }
    ///
    /// let mut people = KeyedCollection::of();
    /// assert!(people.add(Person { id: 1, name: "Ada".to_string() }).is_ok());
    /// assert_eq!(people.len(), 1);
    /// ```
    #[must_use]
    pub fn of() -> Self {
        Self::new(T::distinct_key)
    }

    /// Creates a collection keyed by [`Distinct`] and seeded with
    /// `elements` through the validated insertion path.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateKeyError`] if two seed elements collide on key.
    pub fn of_elements<I>(elements: I) -> Result<Self, DuplicateKeyError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_elements(T::distinct_key, elements)
    }
}

impl<T: Distinct> Default for KeyedCollection<T> {
    #[inline]
    fn default() -> Self {
        Self::of()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Clone, K, F: Clone> Clone for DistinctCollection<T, K, F> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            key: self.key.clone(),
            marker: PhantomData,
        }
    }
}

/// Equality compares the element sequences; the accessor configuration is
/// not comparable and does not participate.
impl<T: PartialEq, K, F> PartialEq for DistinctCollection<T, K, F> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq, K, F> Eq for DistinctCollection<T, K, F> {}

impl<T: fmt::Debug, K, F> fmt::Debug for DistinctCollection<T, K, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, K, F> fmt::Display for DistinctCollection<T, K, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.elements, formatter)
    }
}

impl<T, K, F> IntoIterator for DistinctCollection<T, K, F> {
    type Item = T;
    type IntoIter = CollectionIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T, K, F> IntoIterator for &'a DistinctCollection<T, K, F> {
    type Item = &'a T;
    type IntoIter = CollectionIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, K, F> serde::Serialize for DistinctCollection<T, K, F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.elements, serializer)
    }
}

/// Seeded decoder for [`DistinctCollection`].
///
/// The encoded representation carries only the element sequence, so
/// decoding needs the accessor configuration from the caller. The seed
/// holds it and implements [`serde::de::DeserializeSeed`] in one of two
/// modes:
///
/// - [`trusted`](Self::trusted): the default decode contract. The sequence
///   replaces the collection state wholesale with no re-validation, which
///   is fast for payloads this process encoded itself but admits
///   invariant-violating input verbatim.
/// - [`checked`](Self::checked): every element passes through the validated
///   insertion path; a key collision fails the decode with a format-level
///   error.
///
/// # Examples
///
/// ```rust
/// use orderly::distinct::DistinctCollectionSeed;
/// use serde::de::DeserializeSeed;
///
/// let mut deserializer = serde_json::Deserializer::from_str("[3, 3]");
/// let collection = DistinctCollectionSeed::trusted(|element: &i32| *element)
///     .deserialize(&mut deserializer)
///     .unwrap();
/// assert_eq!(collection.len(), 2); // duplicate keys admitted verbatim
///
/// let mut deserializer = serde_json::Deserializer::from_str("[3, 3]");
/// let checked = DistinctCollectionSeed::checked(|element: &i32| *element)
///     .deserialize(&mut deserializer);
/// assert!(checked.is_err());
/// ```
#[cfg(feature = "serde")]
pub struct DistinctCollectionSeed<T, K, F> {
    key: F,
    validate: bool,
    marker: PhantomData<fn() -> (T, K)>,
}

#[cfg(feature = "serde")]
impl<T, K, F> DistinctCollectionSeed<T, K, F> {
    /// Creates a seed that restores the decoded sequence wholesale,
    /// skipping validation.
    #[must_use]
    pub const fn trusted(key: F) -> Self {
        Self {
            key,
            validate: false,
            marker: PhantomData,
        }
    }

    /// Creates a seed that routes every decoded element through the
    /// validated insertion path.
    #[must_use]
    pub const fn checked(key: F) -> Self {
        Self {
            key,
            validate: true,
            marker: PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, K, F> serde::de::DeserializeSeed<'de> for DistinctCollectionSeed<T, K, F>
where
    T: serde::Deserialize<'de>,
    F: Fn(&T) -> K,
    K: PartialEq,
{
    type Value = DistinctCollection<T, K, F>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements: Collection<T> = serde::Deserialize::deserialize(deserializer)?;
        let mut collection = DistinctCollection::new(self.key);
        if self.validate {
            collection
                .restore_checked(elements)
                .map_err(serde::de::Error::custom)?;
        } else {
            collection.restore(elements);
        }
        Ok(collection)
    }
}

// =============================================================================
// Tests
// =============================================================================
