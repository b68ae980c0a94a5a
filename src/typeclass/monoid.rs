//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ```text
//! T::empty().combine(a) == a    // left identity
//! a.combine(T::empty()) == a    // right identity
//! ```
//!
//! plus associativity, inherited from [`Semigroup`].
//!
//! # Examples
//!
//! ```rust
//! use sorted_array_set::persistent::SortedSet;
//! use sorted_array_set::typeclass::{Monoid, Semigroup};
//!
//! let set = SortedSet::of(["a", "b"]);
//! let identity = <SortedSet<&str> as Monoid>::empty();
//!
//! // For sets the identity laws hold by identity, not only by equality
//! assert!(identity.clone().combine(set.clone()).ptr_eq(&set));
//! assert!(set.clone().combine(identity).ptr_eq(&set));
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// All implementations must satisfy (in addition to Semigroup laws):
///
/// ## Left Identity
///
/// For all `a`:
/// ```text
/// Self::empty().combine(a) == a
/// ```
///
/// ## Right Identity
///
/// For all `a`:
/// ```text
/// a.combine(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this method always returns a value
    /// (the identity element for empty iterators).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    /// use sorted_array_set::typeclass::Monoid;
    ///
    /// let sets = vec![SortedSet::of(["c"]), SortedSet::of(["a", "b"])];
    /// assert_eq!(SortedSet::combine_all(sets).as_slice(), &["a", "b", "c"]);
    ///
    /// let none: Vec<SortedSet<&str>> = vec![];
    /// assert!(SortedSet::combine_all(none).is_empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}
