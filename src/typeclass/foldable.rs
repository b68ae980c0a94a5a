//! Foldable type class - folding over data structures.
//!
//! A `Foldable` can have its elements reduced into a single summary value.
//! For [`SortedSet`](crate::persistent::SortedSet), `fold_left` visits the
//! elements in ascending order and `fold_right` in descending order.
//!
//! # Laws
//!
//! ## Consistency with `to_list`
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().into_iter().fold(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sorted_array_set::persistent::SortedSet;
//! use sorted_array_set::typeclass::Foldable;
//!
//! let set = SortedSet::of([5, 1, 3]);
//! let digits = set.fold_left(String::new(), |mut accumulator, element| {
//!     accumulator.push_str(&element.to_string());
//!     accumulator
//! });
//! assert_eq!(digits, "135");
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Provided Methods
///
/// All other methods have default implementations based on `fold_left`:
///
/// - `fold_map`: Map each element to a `Monoid` and combine results
/// - `is_empty`: Check if the structure has no elements
/// - `length`: Count the number of elements
/// - `to_list`: Convert to a `Vec`
/// - `find`: Find the first element matching a predicate
/// - `exists`: Check if any element matches a predicate
/// - `for_all`: Check if all elements match a predicate
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    ///
    /// This is equivalent to Rust's `Iterator::fold` method.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    /// use sorted_array_set::typeclass::Foldable;
    ///
    /// let set = SortedSet::of([1, 2, 3]);
    /// let sum = set.fold_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 6);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    /// use sorted_array_set::typeclass::Foldable;
    ///
    /// let set = SortedSet::of([1, 2, 3]);
    /// // Builds "123" by folding from the right: f(1, f(2, f(3, "")))
    /// let result = set.fold_right(String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(result, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a `Monoid` and combines all results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    /// use sorted_array_set::typeclass::Foldable;
    ///
    /// let words = SortedSet::of(["apple", "avocado", "banana"]);
    /// let initials: SortedSet<char> =
    ///     words.fold_map(|word| SortedSet::of(word.chars().take(1)));
    /// assert_eq!(initials.as_slice(), &['a', 'b']);
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` containing all elements.
    ///
    /// The order of elements is determined by the fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying a predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    /// use sorted_array_set::typeclass::Foldable;
    ///
    /// let set = SortedSet::of([5, 4, 3, 2, 1]);
    /// assert_eq!(set.clone().find(|element| *element > 3), Some(4));
    /// assert_eq!(set.find(|element| *element > 10), None);
    /// ```
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Checks if any element satisfies the predicate.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Checks if all elements satisfy the predicate.
    ///
    /// Returns `true` for an empty structure.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistent::SortedSet;
    use rstest::rstest;

    #[rstest]
    fn find_returns_smallest_match() {
        let set = SortedSet::of([9, 7, 5, 3]);
        assert_eq!(set.find(|element| *element > 4), Some(5));
    }

    #[rstest]
    #[case::all_even(vec![2, 4, 6], true)]
    #[case::one_odd(vec![2, 3, 6], false)]
    #[case::empty(vec![], true)]
    fn for_all_even(#[case] values: Vec<i32>, #[case] expected: bool) {
        let set = SortedSet::from(values);
        assert_eq!(set.for_all(|element| element % 2 == 0), expected);
    }

    #[rstest]
    fn exists_on_empty_is_false() {
        let set: SortedSet<i32> = SortedSet::empty();
        assert!(!set.exists(|_| true));
    }

    #[rstest]
    fn fold_left_agrees_with_to_list() {
        let set = SortedSet::of([4, 2, 8]);
        let folded = set.clone().fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        });
        assert_eq!(folded, set.to_list());
    }

    #[rstest]
    fn fold_map_into_set_monoid_unions() {
        let set = SortedSet::of([1, 2, 3]);
        let doubled: SortedSet<i32> =
            set.fold_map(|element| SortedSet::of([element, element * 2]));
        assert_eq!(doubled.as_slice(), &[1, 2, 3, 4, 6]);
    }
}
