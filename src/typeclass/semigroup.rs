//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sorted_array_set::persistent::SortedSet;
//! use sorted_array_set::typeclass::Semigroup;
//!
//! // Sets combine by union
//! let left = SortedSet::of([1, 2]);
//! let right = SortedSet::of([2, 3]);
//! assert_eq!(left.combine(right).as_slice(), &[1, 2, 3]);
//! ```

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    /// Types can override this for more efficient implementations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    /// use sorted_array_set::typeclass::Semigroup;
    ///
    /// let large = SortedSet::of([1, 2, 3]);
    /// let small = SortedSet::of([2]);
    /// let result = large.combine_ref(&small);
    ///
    /// // Nothing was added, so the larger set is returned as is
    /// assert!(result.ptr_eq(&large));
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// For an idempotent operation such as set union this returns a value
    /// equal to `self`.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        if count == 1 {
            return self;
        }

        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine(self.clone());
        }
        result
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    /// For a version that returns a default value for empty iterators, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    /// use sorted_array_set::typeclass::Semigroup;
    ///
    /// let sets = vec![SortedSet::of([3]), SortedSet::of([1]), SortedSet::of([2])];
    /// assert_eq!(SortedSet::reduce_all(sets), Some(SortedSet::of([1, 2, 3])));
    ///
    /// let none: Vec<SortedSet<i32>> = vec![];
    /// assert_eq!(SortedSet::reduce_all(none), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistent::SortedSet;
    use rstest::rstest;

    #[rstest]
    fn combine_n_of_union_is_idempotent() {
        let set = SortedSet::of([1, 2]);
        assert_eq!(set.clone().combine_n(3), set);
    }

    #[rstest]
    fn combine_n_once_returns_self() {
        let set = SortedSet::of([1, 2]);
        assert!(set.clone().combine_n(1).ptr_eq(&set));
    }

    #[rstest]
    #[should_panic(expected = "combine_n requires count > 0")]
    fn combine_n_zero_panics() {
        let _ = SortedSet::of([1]).combine_n(0);
    }

    #[rstest]
    fn union_associativity() {
        let a = SortedSet::of([1, 4]);
        let b = SortedSet::of([2, 4]);
        let c = SortedSet::of([3, 5]);
        assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }
}
