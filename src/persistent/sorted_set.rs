//! Persistent ordered set backed by a sorted array.
//!
//! This module provides [`SortedSet`], an immutable set whose elements live in
//! a single sorted, deduplicated `Vec` shared through a reference counter.
//!
//! # Overview
//!
//! `SortedSet` is built for callers that compare sets by *identity* to find
//! out whether anything changed:
//! - Every operation whose result is element-for-element identical to one of
//!   its inputs returns that input, sharing the same storage
//! - All empty sets are the same canonical empty value, which owns no storage
//! - [`SortedSet::ptr_eq`] exposes the identity check
//!
//! # Identity Guarantees
//!
//! | Call                                | Returns (by identity)          |
//! |-------------------------------------|--------------------------------|
//! | `a.union(&b)` with `b ⊆ a`          | `a`                            |
//! | `a.union(&b)` with `a ⊊ b`          | `b`                            |
//! | `a.intersection(&b)` with `a ⊆ b`   | `a`                            |
//! | `a.intersection(&b)` with `b ⊊ a`   | `b`                            |
//! | `a.difference(&b)` with `a ∩ b = ∅` | `a`                            |
//! | `a.symmetric_difference(&empty)`    | `a`                            |
//! | `a.add(k)` with `k ∈ a`             | `a`                            |
//! | `a.remove(&k)` with `k ∉ a`         | `a`                            |
//! | any operation with an empty result  | [`SortedSet::empty`]           |
//!
//! Identity results allocate nothing: the merge detects them while it walks.
//!
//! # Time Complexity
//!
//! | Operation              | Complexity   |
//! |------------------------|--------------|
//! | `has`                  | O(log n)     |
//! | `add` / `remove`       | O(n)         |
//! | `len` / `is_empty`     | O(1)         |
//! | `first` / `last`       | O(1)         |
//! | `union`                | O(n + m)     |
//! | `intersection`         | O(n + m)     |
//! | `difference`           | O(n + m)     |
//! | `symmetric_difference` | O(n + m)     |
//! | `is_subset`            | O(n + m)     |
//! | `is_disjoint`          | O(n + m)     |
//! | `from` / `of`          | O(n log n)   |
//!
//! # Ordering Contract
//!
//! Elements are ordered by their [`Ord`] implementation, and `==` must agree
//! with it. An inconsistent `Ord` is a logic error: the set will not panic or
//! cause memory unsafety, but sortedness and uniqueness are no longer
//! guaranteed, and neither are the results of any operation.
//!
//! # Examples
//!
//! ```rust
//! use sorted_array_set::persistent::SortedSet;
//!
//! let subset = SortedSet::of(["b", "c", "d", "e", "f"]);
//! let superset = SortedSet::of(["a", "b", "c", "d", "e", "f", "g"]);
//!
//! assert_eq!(superset.difference(&subset), SortedSet::of(["a", "g"]));
//!
//! // Identity is preserved when nothing changes
//! assert!(subset.union(&superset).ptr_eq(&superset));
//! assert!(subset.intersection(&superset).ptr_eq(&subset));
//! assert!(subset.add("b").ptr_eq(&subset));
//! assert!(subset.remove("g").ptr_eq(&subset));
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use tracing::trace;

use super::ReferenceCounter;
use super::error::SortedSetError;
use super::sequence::{self, MergeOutcome, MergePolicy};

#[cfg(feature = "typeclass")]
use crate::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

/// A sorted, deduplicated, non-empty `Vec` behind a reference counter.
struct SortedVec<T>(ReferenceCounter<Vec<T>>);

impl<T> SortedVec<T> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for SortedVec<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(ReferenceCounter::clone(&self.0))
    }
}

/// A persistent set of elements kept in one sorted, deduplicated array.
///
/// All operations are immutable: they return a new set (or one of their
/// inputs, unchanged) and never modify an existing set. Cloning a set only
/// clones a reference-counted handle.
///
/// # Type Parameters
///
/// * `T` - The element type. Set operations require `Clone + Ord`.
///
/// # Examples
///
/// ```rust
/// use sorted_array_set::persistent::SortedSet;
///
/// let set = SortedSet::of([3, 1, 2, 3]);
/// assert_eq!(set.as_slice(), &[1, 2, 3]);
///
/// let extended = set.add(4);
/// assert_eq!(set.len(), 3);      // Original unchanged
/// assert_eq!(extended.len(), 4); // New version
/// ```
pub struct SortedSet<T> {
    storage: Option<SortedVec<T>>,
}

// Sharing is only sound across threads with the `arc` feature.
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(SortedSet<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(SortedSet<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(SortedSet<String>: Send, Sync);

impl<T> SortedSet<T> {
    /// Returns the canonical empty set.
    ///
    /// The empty set owns no storage, and every empty set produced by any
    /// operation is this same value, so `ptr_eq` holds between any two of them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let empty: SortedSet<i32> = SortedSet::empty();
    /// assert!(empty.is_empty());
    ///
    /// let drained = SortedSet::of([1]).remove(&1);
    /// assert!(drained.ptr_eq(&empty));
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { storage: None }
    }

    /// Creates a set containing exactly one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let set = SortedSet::singleton(42);
    /// assert_eq!(set.len(), 1);
    /// assert!(set.has(&42));
    /// ```
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::from_normalized(vec![element])
    }

    /// Wraps a vector that is already sorted and deduplicated.
    pub(super) fn from_normalized(elements: Vec<T>) -> Self {
        if elements.is_empty() {
            Self::empty()
        } else {
            Self {
                storage: Some(SortedVec(ReferenceCounter::new(elements))),
            }
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if this is the empty set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.storage.is_none()
    }

    /// Returns the elements as a slice in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let set = SortedSet::of([2, 1]);
    /// assert_eq!(set.as_slice(), &[1, 2]);
    /// assert!(SortedSet::<i32>::empty().as_slice().is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match &self.storage {
            Some(storage) => storage.as_slice(),
            None => &[],
        }
    }

    /// Returns the smallest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the largest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the element at `index` in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let set = SortedSet::of([30, 10, 20]);
    /// assert_eq!(set.get(1), Some(&20));
    /// assert_eq!(set.get(3), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let set = SortedSet::of([3, 1, 2]);
    /// let elements: Vec<&i32> = set.iter().collect();
    /// assert_eq!(elements, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SortedSetIterator<'_, T> {
        SortedSetIterator {
            inner: self.as_slice().iter(),
        }
    }

    /// Returns `true` if both sets are the same value.
    ///
    /// Two sets are the same value when both are the canonical empty set, or
    /// when both share one backing allocation. This is the identity that the
    /// set operations preserve: an operation that changes nothing returns a
    /// set for which `ptr_eq` with the input holds. A `false` answer says
    /// nothing about content; use `==` for that.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let set = SortedSet::of([1, 2, 3]);
    /// let copy = SortedSet::of([1, 2, 3]);
    ///
    /// assert!(set.ptr_eq(&set.clone()));
    /// assert!(!set.ptr_eq(&copy)); // Equal content, different storage
    /// assert_eq!(set, copy);
    /// ```
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.storage, &other.storage) {
            (None, None) => true,
            (Some(left), Some(right)) => left.ptr_eq(right),
            _ => false,
        }
    }

    /// Returns `true` if the set contains `key`.
    ///
    /// Supports borrowed forms of the element type: a `SortedSet<String>`
    /// can be searched with a `&str`.
    ///
    /// # Complexity
    ///
    /// O(log n) comparisons (binary search). The empty set answers without
    /// comparing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let set = SortedSet::of(["apple".to_string(), "banana".to_string()]);
    /// assert!(set.has("apple"));
    /// assert!(!set.has("cherry"));
    /// ```
    #[inline]
    #[must_use]
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        sequence::contains(self.as_slice(), key)
    }
}

impl<T: Ord> SortedSet<T> {
    /// Creates a set from the given values, in any order and with duplicates.
    ///
    /// This is the variadic-style constructor: it accepts arrays, vectors and
    /// any other iterable, sorts a copy and keeps one element of every run of
    /// equal elements.
    ///
    /// # Complexity
    ///
    /// O(n log n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let set = SortedSet::of(["b", "a", "a", "c", "b"]);
    /// assert_eq!(set.as_slice(), &["a", "b", "c"]);
    /// ```
    #[must_use]
    pub fn of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::normalized(values.into_iter().collect())
    }

    fn normalized(elements: Vec<T>) -> Self {
        let input_length = elements.len();
        let elements = sequence::normalize(elements);
        trace!(
            input_length,
            output_length = elements.len(),
            "normalized input into sorted set"
        );
        Self::from_normalized(elements)
    }

    /// Creates a set from a vector that is already strictly ascending.
    ///
    /// No sorting or deduplication is performed.
    ///
    /// # Preconditions
    ///
    /// The vector must be sorted in strictly ascending order. In debug builds
    /// this is checked with `debug_assert!`; in release builds invalid input
    /// yields a set whose operations return unspecified results (a logic
    /// error, not memory unsafety). Use [`SortedSet::try_from_sorted_vec`] for
    /// a checked version.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let set = SortedSet::from_sorted_vec(vec![2, 4, 6, 8, 10]);
    /// assert_eq!(set.len(), 5);
    /// ```
    #[must_use]
    pub fn from_sorted_vec(elements: Vec<T>) -> Self {
        debug_assert!(
            sequence::is_strictly_ascending(&elements),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );
        Self::from_normalized(elements)
    }

    /// Creates a set from a vector that should be strictly ascending,
    /// checking that it is.
    ///
    /// # Errors
    ///
    /// Returns [`SortedSetError::NotStrictlyAscending`] with the index of the
    /// first element that is not greater than its predecessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::{SortedSet, SortedSetError};
    ///
    /// assert!(SortedSet::try_from_sorted_vec(vec![1, 2, 3]).is_ok());
    /// assert_eq!(
    ///     SortedSet::try_from_sorted_vec(vec![1, 2, 2]),
    ///     Err(SortedSetError::NotStrictlyAscending { index: 2 })
    /// );
    /// ```
    pub fn try_from_sorted_vec(elements: Vec<T>) -> Result<Self, SortedSetError> {
        match sequence::first_unordered_index(&elements) {
            Some(index) => Err(SortedSetError::NotStrictlyAscending { index }),
            None => Ok(Self::from_normalized(elements)),
        }
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// # Complexity
    ///
    /// O(n + m), stopping at the first element of `self` missing from `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let small = SortedSet::of([2, 3]);
    /// let large = SortedSet::of([1, 2, 3, 4]);
    /// assert!(small.is_subset(&large));
    /// assert!(!large.is_subset(&small));
    /// assert!(SortedSet::empty().is_subset(&small));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.is_empty() || self.ptr_eq(other) {
            return true;
        }
        sequence::is_subset(self.as_slice(), other.as_slice())
    }

    /// Returns `true` if every element of `other` is in `self`.
    ///
    /// Equivalent to `other.is_subset(self)`.
    #[inline]
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` have no element in common.
    ///
    /// # Complexity
    ///
    /// O(n + m), stopping at the first shared element. Sets whose ranges do
    /// not overlap are answered in O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let odds = SortedSet::of([1, 3, 5]);
    /// let evens = SortedSet::of([2, 4, 6]);
    /// assert!(odds.is_disjoint(&evens));
    /// assert!(!odds.is_disjoint(&SortedSet::of([5, 6])));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return self.is_empty();
        }
        sequence::is_disjoint(self.as_slice(), other.as_slice())
    }
}

impl<T: Clone + Ord> SortedSet<T> {
    /// Returns a set that contains `key`.
    ///
    /// If `key` is already present, returns `self` unchanged (same storage).
    /// Otherwise builds a new array with `key` at its sorted position.
    ///
    /// # Complexity
    ///
    /// O(log n) to find the position, O(n) to build the new array. Keys
    /// beyond either end of the set are placed without searching.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let set = SortedSet::of([1, 3]);
    /// assert_eq!(set.add(2).as_slice(), &[1, 2, 3]);
    ///
    /// // Adding an existing key is a no-op that keeps identity
    /// assert!(set.add(3).ptr_eq(&set));
    /// ```
    #[must_use]
    pub fn add(&self, key: T) -> Self {
        let elements = self.as_slice();
        let position = match (elements.first(), elements.last()) {
            (None, _) | (_, None) => return Self::singleton(key),
            (_, Some(last)) if last < &key => elements.len(),
            (Some(first), _) if &key < first => 0,
            _ => match sequence::locate(elements, &key) {
                Ok(_) => return self.clone(),
                Err(position) => position,
            },
        };

        let mut output = Vec::with_capacity(elements.len() + 1);
        output.extend_from_slice(&elements[..position]);
        output.push(key);
        output.extend_from_slice(&elements[position..]);
        Self::from_normalized(output)
    }

    /// Returns a set that does not contain `key`.
    ///
    /// If `key` is absent, returns `self` unchanged (same storage); absence is
    /// decided by binary search without touching the rest of the array.
    /// Removing the only element yields the canonical empty set.
    ///
    /// # Complexity
    ///
    /// O(log n) when `key` is absent, O(n) otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let set = SortedSet::of(["b", "c", "d"]);
    /// assert_eq!(set.remove("b").as_slice(), &["c", "d"]);
    /// assert!(set.remove("z").ptr_eq(&set));
    /// ```
    #[must_use]
    pub fn remove<Q>(&self, key: &Q) -> Self
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let elements = self.as_slice();
        let Ok(position) = sequence::locate(elements, key) else {
            return self.clone();
        };

        let mut output = Vec::with_capacity(elements.len() - 1);
        output.extend_from_slice(&elements[..position]);
        output.extend_from_slice(&elements[position + 1..]);
        Self::from_normalized(output)
    }

    /// Returns the union of two sets.
    ///
    /// If the union equals `self` it returns `self`, else if it equals `other`
    /// it returns `other`; only otherwise is a new array built.
    ///
    /// # Complexity
    ///
    /// O(n + m). Empty inputs and sets sharing storage return immediately.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let left = SortedSet::of([1, 3, 5]);
    /// let right = SortedSet::of([2, 3, 4]);
    /// assert_eq!(left.union(&right).as_slice(), &[1, 2, 3, 4, 5]);
    ///
    /// let small = SortedSet::of([3]);
    /// assert!(left.union(&small).ptr_eq(&left));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if other.is_empty() || self.ptr_eq(other) {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        self.resolve(other, MergePolicy::UNION, "union")
    }

    /// Returns the elements present in both sets.
    ///
    /// If the intersection equals `self` it returns `self`, else if it equals
    /// `other` it returns `other`. An empty input short-circuits to the
    /// canonical empty set.
    ///
    /// # Complexity
    ///
    /// O(n + m). Sets whose ranges do not overlap return in O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let left = SortedSet::of([1, 2, 3, 4, 5]);
    /// let right = SortedSet::of([3, 4, 5, 6, 7]);
    /// assert_eq!(left.intersection(&right).as_slice(), &[3, 4, 5]);
    ///
    /// let inner = SortedSet::of([2, 4]);
    /// assert!(left.intersection(&inner).ptr_eq(&inner));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }
        if self.ptr_eq(other) {
            return self.clone();
        }
        self.resolve(other, MergePolicy::INTERSECTION, "intersection")
    }

    /// Returns the elements of `self` that are not in `other`.
    ///
    /// Returns `self` unchanged when nothing is removed.
    ///
    /// # Complexity
    ///
    /// O(n + m). Sets whose ranges do not overlap return `self` in O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let left = SortedSet::of([1, 2, 3, 4, 5]);
    /// let right = SortedSet::of([3, 4, 5, 6, 7]);
    /// assert_eq!(left.difference(&right).as_slice(), &[1, 2]);
    ///
    /// let far = SortedSet::of([100]);
    /// assert!(left.difference(&far).ptr_eq(&left));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        if self.ptr_eq(other) {
            return Self::empty();
        }
        self.resolve(other, MergePolicy::DIFFERENCE, "difference")
    }

    /// Returns the elements that are in exactly one of the two sets.
    ///
    /// Returns the non-empty input unchanged when the other one is empty.
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let left = SortedSet::of([1, 2, 3]);
    /// let right = SortedSet::of([3, 4]);
    /// assert_eq!(left.symmetric_difference(&right).as_slice(), &[1, 2, 4]);
    /// assert!(left.symmetric_difference(&left).is_empty());
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        if self.ptr_eq(other) {
            return Self::empty();
        }
        self.resolve(
            other,
            MergePolicy::SYMMETRIC_DIFFERENCE,
            "symmetric_difference",
        )
    }

    /// Runs the merge driver and maps its outcome back onto the inputs.
    fn resolve(&self, other: &Self, policy: MergePolicy, operation: &'static str) -> Self {
        match sequence::merge(self.as_slice(), other.as_slice(), policy) {
            MergeOutcome::Left => {
                trace!(operation, length = self.len(), "returning left input unchanged");
                self.clone()
            }
            MergeOutcome::Right => {
                trace!(
                    operation,
                    length = other.len(),
                    "returning right input unchanged"
                );
                other.clone()
            }
            MergeOutcome::Built(elements) => {
                trace!(operation, length = elements.len(), "built new set");
                Self::from_normalized(elements)
            }
        }
    }

    /// Returns a `Vec` containing clones of all elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let set = SortedSet::of([3, 1, 2]);
    /// assert_eq!(set.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// Takes the elements out, cloning only if the storage is shared.
    pub(super) fn into_vec(self) -> Vec<T> {
        match self.storage {
            None => Vec::new(),
            Some(SortedVec(shared)) => {
                ReferenceCounter::try_unwrap(shared).unwrap_or_else(|shared| Vec::clone(&shared))
            }
        }
    }
}

impl<T> Clone for SortedSet<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

impl<T> Default for SortedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of a [`SortedSet`], in ascending
/// order.
pub struct SortedSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for SortedSetIterator<'a, T> {
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

impl<T> DoubleEndedIterator for SortedSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SortedSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SortedSetIterator<'_, T> {}

impl<T> Clone for SortedSetIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// An owning iterator over the elements of a [`SortedSet`], in ascending
/// order.
///
/// Moves the elements out when the set was the only owner of its storage and
/// clones them otherwise.
pub struct SortedSetIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for SortedSetIntoIterator<T> {
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

impl<T> DoubleEndedIterator for SortedSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SortedSetIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SortedSetIntoIterator<T> {}

impl<T: Clone + Ord> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = SortedSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SortedSetIntoIterator {
            inner: self.into_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = SortedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Construction Traits
// =============================================================================

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::normalized(iter.into_iter().collect())
    }
}

impl<T: Ord> From<Vec<T>> for SortedSet<T> {
    /// Sorts and deduplicates `elements` into a set.
    fn from(elements: Vec<T>) -> Self {
        Self::normalized(elements)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SortedSet<T> {
    fn from(elements: [T; N]) -> Self {
        Self::normalized(Vec::from(elements))
    }
}

impl<T: Clone + Ord> From<&[T]> for SortedSet<T> {
    fn from(elements: &[T]) -> Self {
        Self::normalized(elements.to_vec())
    }
}

// =============================================================================
// Comparison and Formatting
// =============================================================================

impl<T: PartialEq> PartialEq for SortedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SortedSet<T> {}

impl<T: PartialOrd> PartialOrd for SortedSet<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SortedSet<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SortedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T: Clone + Ord> BitOr<&SortedSet<T>> for &SortedSet<T> {
    type Output = SortedSet<T>;

    /// Returns `self.union(rhs)`.
    fn bitor(self, rhs: &SortedSet<T>) -> SortedSet<T> {
        self.union(rhs)
    }
}

impl<T: Clone + Ord> BitAnd<&SortedSet<T>> for &SortedSet<T> {
    type Output = SortedSet<T>;

    /// Returns `self.intersection(rhs)`.
    fn bitand(self, rhs: &SortedSet<T>) -> SortedSet<T> {
        self.intersection(rhs)
    }
}

impl<T: Clone + Ord> Sub<&SortedSet<T>> for &SortedSet<T> {
    type Output = SortedSet<T>;

    /// Returns `self.difference(rhs)`.
    fn sub(self, rhs: &SortedSet<T>) -> SortedSet<T> {
        self.difference(rhs)
    }
}

impl<T: Clone + Ord> BitXor<&SortedSet<T>> for &SortedSet<T> {
    type Output = SortedSet<T>;

    /// Returns `self.symmetric_difference(rhs)`.
    fn bitxor(self, rhs: &SortedSet<T>) -> SortedSet<T> {
        self.symmetric_difference(rhs)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<T> TypeConstructor for SortedSet<T> {
    type Inner = T;
    type WithType<B> = SortedSet<B>;
}

/// Sets form a semigroup under union.
#[cfg(feature = "typeclass")]
impl<T: Clone + Ord> Semigroup for SortedSet<T> {
    fn combine(self, other: Self) -> Self {
        self.union(&other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.union(other)
    }
}

/// The canonical empty set is the identity of union.
#[cfg(feature = "typeclass")]
impl<T: Clone + Ord> Monoid for SortedSet<T> {
    fn empty() -> Self {
        Self { storage: None }
    }

    fn is_empty_value(&self) -> bool {
        self.storage.is_none()
    }
}

#[cfg(feature = "typeclass")]
impl<T: Clone + Ord> Foldable for SortedSet<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.storage.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        self.as_slice().len()
    }

    fn to_list(self) -> Vec<T> {
        self.into_vec()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SortedSet<T> {
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
struct SortedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SortedSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SortedSetVisitor<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    type Value = SortedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Bounded so a hostile length prefix cannot force a huge allocation.
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(SortedSet::normalized(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedSet<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedSetVisitor::new())
    }
}

/// Message constant for panic when `from_sorted_vec` receives invalid input.
const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "from_sorted_vec requires strictly increasing elements (sorted + deduplicated)";

// =============================================================================
// Tests
// =============================================================================
