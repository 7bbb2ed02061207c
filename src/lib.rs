//! # orderly
//!
//! Ordered collections with pluggable key-based distinctness.
//!
//! ## Overview
//!
//! This library provides two insertion-ordered containers built on the same
//! storage:
//!
//! - [`Collection`](collection::Collection): a mutable sequence deciding
//!   membership by element equality, admitting duplicates
//! - [`DistinctCollection`](distinct::DistinctCollection): a sequence
//!   admitting at most one element per *distinct key*, where the key is
//!   derived by an accessor function fixed at construction
//!
//! Both report containment rather than success: `add` and `remove` answer
//! the question "would a membership check find this now?". Both offer
//! predicate search, same-kind filtering, and (behind the `serde` feature)
//! serialization of the element sequence.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the base collection and seeded
//!   decoding for the distinct collection (enabled by default)
//!
//! ## Example
//!
//! ```rust
//! use orderly::prelude::*;
//!
//! let mut tags = Collection::new();
//! tags.add("alpha");
//! tags.add("alpha");
//! assert_eq!(tags.len(), 2); // duplicates are admitted
//!
//! let mut by_length = DistinctCollection::new(|tag: &&str| tag.len());
//! assert!(by_length.add("alpha").is_ok());
//! assert!(by_length.add("omega").is_err()); // same derived key
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use orderly::prelude::*;
/// ```
pub mod prelude {

    pub use crate::collection::*;

    pub use crate::distinct::*;

    pub use crate::error::*;
}

pub mod collection;

pub mod distinct;

pub mod error;
