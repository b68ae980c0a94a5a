//! Error types for checked set construction.

use thiserror::Error;

/// Represents an error when building a [`SortedSet`](super::SortedSet) from
/// input that claims to be sorted but is not.
///
/// Only [`SortedSet::try_from_sorted_vec`](super::SortedSet::try_from_sorted_vec)
/// returns this error. Every other operation on a set is total.
///
/// # Examples
///
/// ```rust
/// use sorted_array_set::persistent::{SortedSet, SortedSetError};
///
/// let error = SortedSet::try_from_sorted_vec(vec![1, 3, 2]).unwrap_err();
/// assert_eq!(error, SortedSetError::NotStrictlyAscending { index: 2 });
/// assert_eq!(
///     format!("{error}"),
///     "element at index 2 is not greater than its predecessor"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortedSetError {
    /// The element at `index` is less than or equal to the element before it.
    #[error("element at index {index} is not greater than its predecessor")]
    NotStrictlyAscending {
        /// Position of the first offending element.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_names_the_index() {
        let error = SortedSetError::NotStrictlyAscending { index: 4 };
        assert_eq!(
            error.to_string(),
            "element at index 4 is not greater than its predecessor"
        );
    }

    #[rstest]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&SortedSetError::NotStrictlyAscending { index: 1 });
    }
}
