//! Type class traits for functional programming abstractions.
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//! - [`Foldable`]: Folding over structures to produce summary values
//!
//! [`SortedSet`](crate::persistent::SortedSet) is an instance of all four:
//! it combines by union, its identity element is the canonical empty set,
//! and it folds in ascending order.
//!
//! # Examples
//!
//! ```rust
//! use sorted_array_set::persistent::SortedSet;
//! use sorted_array_set::typeclass::{Foldable, Monoid, Semigroup};
//!
//! let merged = SortedSet::combine_all(vec![
//!     SortedSet::of([3, 1]),
//!     SortedSet::of([2]),
//! ]);
//! assert_eq!(merged.as_slice(), &[1, 2, 3]);
//!
//! let total = merged.combine(SortedSet::of([4])).fold_left(0, |sum, element| sum + element);
//! assert_eq!(total, 10);
//! ```

mod foldable;
mod higher;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
