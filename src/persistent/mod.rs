//! Persistent (immutable) sorted set.
//!
//! This module provides:
//!
//! - [`SortedSet`]: Persistent ordered set backed by a shared sorted array
//! - [`TransientSortedSet`]: Mutable builder that freezes into a [`SortedSet`]
//! - [`SortedSetError`]: Error returned by checked construction
//!
//! # Identity Preservation
//!
//! Every operation that leaves a set unchanged returns the input itself
//! rather than an equal copy, so callers can detect "nothing changed" with
//! [`SortedSet::ptr_eq`] in O(1).
//!
//! # Examples
//!
//! ```rust
//! use sorted_array_set::persistent::SortedSet;
//!
//! let set = SortedSet::of([3, 1, 2]);
//! assert_eq!(set.as_slice(), &[1, 2, 3]);
//!
//! // Structural sharing: the original set is preserved
//! let updated = set.add(4);
//! assert_eq!(set.len(), 3);     // Original unchanged
//! assert_eq!(updated.len(), 4); // New version
//!
//! // Identity: no-op updates return the same set
//! assert!(set.add(2).ptr_eq(&set));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod error;
mod sequence;
mod sorted_set;
mod transient;

pub use error::SortedSetError;
pub use sorted_set::SortedSet;
pub use sorted_set::SortedSetIntoIterator;
pub use sorted_set::SortedSetIterator;
pub use transient::TransientSortedSet;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_ptr_eq_follows_clones() {
        let reference_counter: ReferenceCounter<Vec<i32>> = ReferenceCounter::new(vec![1]);
        let reference_counter_clone = ReferenceCounter::clone(&reference_counter);
        let separate: ReferenceCounter<Vec<i32>> = ReferenceCounter::new(vec![1]);
        assert!(ReferenceCounter::ptr_eq(&reference_counter, &reference_counter_clone));
        assert!(!ReferenceCounter::ptr_eq(&reference_counter, &separate));
    }

    #[rstest]
    fn test_reference_counter_try_unwrap_requires_unique_owner() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        let reference_counter_clone = reference_counter.clone();
        let reference_counter = ReferenceCounter::try_unwrap(reference_counter).unwrap_err();
        drop(reference_counter_clone);
        assert_eq!(ReferenceCounter::try_unwrap(reference_counter), Ok(42));
    }
}
