//! Transient (temporarily mutable) builder for [`SortedSet`].
//!
//! Building a set one element at a time through [`SortedSet::add`] copies the
//! whole array on every call. [`TransientSortedSet`] owns a plain sorted
//! `Vec` instead, so a batch of inserts and removals happens in place and is
//! frozen into a [`SortedSet`] once at the end.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use tracing::trace;

use super::SortedSet;
use super::sequence;

// =============================================================================
// TransientSortedSet Definition
// =============================================================================

/// A mutable, single-owner builder that produces a [`SortedSet`].
///
/// The elements stay sorted and deduplicated after every call, so
/// [`persistent()`](Self::persistent) only has to wrap them.
///
/// # Design
///
/// - `PhantomData<Rc<()>>` keeps the builder `!Send` and `!Sync`, even with
///   the `arc` feature
/// - `Clone` is not implemented: a transient has exactly one owner
///
/// # Examples
///
/// ```rust
/// use sorted_array_set::persistent::TransientSortedSet;
///
/// let mut transient = TransientSortedSet::new();
/// transient.insert(3);
/// transient.insert(1);
/// transient.insert(2);
///
/// let set = transient.persistent();
/// assert_eq!(set.as_slice(), &[1, 2, 3]);
/// ```
///
/// # Transient-Persistent Pattern
///
/// ```rust
/// use sorted_array_set::persistent::SortedSet;
///
/// let set = SortedSet::of([1, 2, 3]);
///
/// let mut transient = set.transient();
/// transient.extend([4, 5]);
/// transient.remove(&1);
///
/// let updated = transient.persistent();
/// assert_eq!(updated.as_slice(), &[2, 3, 4, 5]);
/// ```
pub struct TransientSortedSet<T> {
    elements: Vec<T>,
    /// Marker to ensure `!Send` and `!Sync`.
    _marker: PhantomData<Rc<()>>,
}

static_assertions::assert_not_impl_any!(TransientSortedSet<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(TransientSortedSet<String>: Send, Sync);

#[cfg(feature = "arc")]
mod arc_send_sync_verification {
    use super::TransientSortedSet;
    use std::sync::Arc;

    static_assertions::assert_not_impl_any!(TransientSortedSet<Arc<i32>>: Send, Sync);
}

// =============================================================================
// TransientSortedSet Implementation
// =============================================================================

impl<T> TransientSortedSet<T> {
    /// Creates an empty transient set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the transient set has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements in ascending order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns `true` if the transient set contains `element`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::TransientSortedSet;
    ///
    /// let mut transient = TransientSortedSet::new();
    /// transient.insert("hello".to_string());
    ///
    /// assert!(transient.contains("hello"));
    /// assert!(!transient.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        sequence::contains(&self.elements, element)
    }

    /// Removes `element`.
    ///
    /// Returns `true` if the element was present.
    ///
    /// # Complexity
    ///
    /// O(log n) to find the element, O(n) to shift the tail.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match sequence::locate(&self.elements, element) {
            Ok(position) => {
                self.elements.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    /// Converts this transient set into a persistent [`SortedSet`].
    ///
    /// An empty transient yields the canonical empty set.
    ///
    /// # Complexity
    ///
    /// O(1): the vector is moved, not copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::{SortedSet, TransientSortedSet};
    ///
    /// let transient: TransientSortedSet<i32> = TransientSortedSet::new();
    /// assert!(transient.persistent().ptr_eq(&SortedSet::empty()));
    /// ```
    #[must_use]
    pub fn persistent(self) -> SortedSet<T> {
        trace!(length = self.elements.len(), "froze transient sorted set");
        SortedSet::from_normalized(self.elements)
    }
}

impl<T: Ord> TransientSortedSet<T> {
    /// Inserts `element` at its sorted position.
    ///
    /// Returns `true` if the element was newly inserted, `false` if an equal
    /// element was already present (the existing element is kept).
    ///
    /// # Complexity
    ///
    /// O(log n) to find the position, O(n) to shift the tail. Appending past
    /// the largest element is amortized O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::TransientSortedSet;
    ///
    /// let mut transient = TransientSortedSet::new();
    /// assert!(transient.insert(1));
    /// assert!(!transient.insert(1));
    /// assert_eq!(transient.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        if self.elements.last().is_none_or(|last| last < &element) {
            self.elements.push(element);
            return true;
        }
        match sequence::locate(&self.elements, &element) {
            Ok(_) => false,
            Err(position) => {
                self.elements.insert(position, element);
                true
            }
        }
    }

    /// Inserts every element produced by `iter`.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> Default for TransientSortedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for TransientSortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: sequence::normalize(iter.into_iter().collect()),
            _marker: PhantomData,
        }
    }
}

impl<T: Ord> Extend<T> for TransientSortedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        Self::extend(self, iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for TransientSortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TransientSortedSet")
            .field("elements", &self.elements)
            .finish()
    }
}

// =============================================================================
// SortedSet::transient() method
// =============================================================================

impl<T: Clone + Ord> SortedSet<T> {
    /// Converts this set into a transient set for batch updates.
    ///
    /// The elements are moved when this set is the only owner of its storage
    /// and cloned otherwise; other sets sharing the storage are unaffected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array_set::persistent::SortedSet;
    ///
    /// let set = SortedSet::of([1, 2]);
    /// let kept = set.clone();
    ///
    /// let mut transient = set.transient();
    /// transient.insert(3);
    ///
    /// assert_eq!(transient.persistent().as_slice(), &[1, 2, 3]);
    /// assert_eq!(kept.as_slice(), &[1, 2]);
    /// ```
    #[must_use]
    pub fn transient(self) -> TransientSortedSet<T> {
        TransientSortedSet {
            elements: self.into_vec(),
            _marker: PhantomData,
        }
    }
}
