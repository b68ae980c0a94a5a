//! Primitives over sorted, deduplicated slices.
//!
//! Everything in this module works on plain slices that are already in
//! strictly ascending order. [`SortedSet`](super::SortedSet) owns the
//! storage and the identity rules; this module owns the comparisons.
//!
//! - [`locate`]: binary search over a closed index range
//! - [`merge`]: the two-pointer driver behind every binary set operation
//! - [`is_subset`] / [`is_disjoint`]: short-circuiting variants of the driver
//! - [`normalize`]: sort + dedup of arbitrary input

use std::borrow::Borrow;
use std::cmp::Ordering;

/// What the merge driver does with an element in one of its three cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Inclusion {
    Emit,
    Skip,
}

impl Inclusion {
    #[inline]
    const fn emits(self) -> bool {
        matches!(self, Self::Emit)
    }
}

/// Inclusion policy of a binary set operation.
///
/// The four set operations differ only in which of the three merge cases
/// contribute to the output:
///
/// | Operation            | both | left only | right only |
/// |----------------------|------|-----------|------------|
/// | union                | Emit | Emit      | Emit       |
/// | intersection         | Emit | Skip      | Skip       |
/// | difference           | Skip | Emit      | Skip       |
/// | symmetric difference | Skip | Emit      | Emit       |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MergePolicy {
    pub(crate) both: Inclusion,
    pub(crate) left_only: Inclusion,
    pub(crate) right_only: Inclusion,
}

impl MergePolicy {
    pub(crate) const UNION: Self = Self {
        both: Inclusion::Emit,
        left_only: Inclusion::Emit,
        right_only: Inclusion::Emit,
    };

    pub(crate) const INTERSECTION: Self = Self {
        both: Inclusion::Emit,
        left_only: Inclusion::Skip,
        right_only: Inclusion::Skip,
    };

    pub(crate) const DIFFERENCE: Self = Self {
        both: Inclusion::Skip,
        left_only: Inclusion::Emit,
        right_only: Inclusion::Skip,
    };

    pub(crate) const SYMMETRIC_DIFFERENCE: Self = Self {
        both: Inclusion::Skip,
        left_only: Inclusion::Emit,
        right_only: Inclusion::Emit,
    };

    /// Upper bound on the output length for inputs of the given lengths.
    const fn capacity(self, left_len: usize, right_len: usize) -> usize {
        match (self.left_only, self.right_only) {
            (Inclusion::Emit, Inclusion::Emit) => left_len + right_len,
            (Inclusion::Emit, Inclusion::Skip) => left_len,
            (Inclusion::Skip, Inclusion::Emit) => right_len,
            (Inclusion::Skip, Inclusion::Skip) => {
                if left_len < right_len {
                    left_len
                } else {
                    right_len
                }
            }
        }
    }
}

/// Result of [`merge`].
///
/// `Left` and `Right` mean the output is element-for-element identical to
/// that input, and no vector was built for it.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum MergeOutcome<T> {
    Left,
    Right,
    Built(Vec<T>),
}

/// Finds `key` in a strictly ascending slice.
///
/// Returns `Ok(index)` when found and `Err(insertion_point)` otherwise, like
/// [`slice::binary_search`]. The search keeps a closed range `[low, high]`
/// and stops when it becomes empty; the empty slice is answered without a
/// comparison.
pub(crate) fn locate<T, Q>(elements: &[T], key: &Q) -> Result<usize, usize>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    if elements.is_empty() {
        return Err(0);
    }

    let mut low = 0;
    let mut high = elements.len() - 1;

    loop {
        let middle = low + (high - low) / 2;
        match elements[middle].borrow().cmp(key) {
            Ordering::Equal => return Ok(middle),
            Ordering::Less => {
                low = middle + 1;
                if low > high {
                    return Err(low);
                }
            }
            Ordering::Greater => {
                if middle == low {
                    return Err(low);
                }
                high = middle - 1;
            }
        }
    }
}

/// Returns `true` if `key` is present in a strictly ascending slice.
#[inline]
pub(crate) fn contains<T, Q>(elements: &[T], key: &Q) -> bool
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    locate(elements, key).is_ok()
}

/// Output buffer of the merge driver.
///
/// The vector is only allocated once the output stops being a prefix of
/// both inputs. Until then `tracks_left` / `tracks_right` record whether the
/// output emitted so far equals `left[..left_index]` / `right[..right_index]`.
struct MergeSink<'a, T> {
    left: &'a [T],
    right: &'a [T],
    capacity: usize,
    tracks_left: bool,
    tracks_right: bool,
    output: Option<Vec<T>>,
}

impl<'a, T: Clone> MergeSink<'a, T> {
    const fn new(left: &'a [T], right: &'a [T], capacity: usize) -> Self {
        Self {
            left,
            right,
            capacity,
            tracks_left: true,
            tracks_right: true,
            output: None,
        }
    }

    /// Updates the tracking flags before the step at `(left_index, right_index)`.
    ///
    /// When the last tracked input is lost, the prefix it still described is
    /// copied into a fresh vector.
    fn settle(
        &mut self,
        left_index: usize,
        right_index: usize,
        tracks_left: bool,
        tracks_right: bool,
    ) {
        if self.output.is_none() && !tracks_left && !tracks_right {
            let prefix = if self.tracks_left {
                &self.left[..left_index]
            } else {
                &self.right[..right_index]
            };
            let mut output = Vec::with_capacity(self.capacity);
            output.extend_from_slice(prefix);
            self.output = Some(output);
        }
        self.tracks_left = tracks_left;
        self.tracks_right = tracks_right;
    }

    #[inline]
    fn push(&mut self, element: &T) {
        if let Some(output) = &mut self.output {
            output.push(element.clone());
        }
    }

    #[inline]
    fn extend(&mut self, elements: &[T]) {
        if let Some(output) = &mut self.output {
            output.extend_from_slice(elements);
        }
    }

    fn finish(self) -> MergeOutcome<T> {
        match self.output {
            Some(output) => MergeOutcome::Built(output),
            None if self.tracks_left => MergeOutcome::Left,
            None if self.tracks_right => MergeOutcome::Right,
            None => MergeOutcome::Built(Vec::new()),
        }
    }
}

/// Merges two strictly ascending slices under `policy`.
///
/// Walks both slices with one cursor each. Equal heads go through
/// `policy.both` and advance both cursors; otherwise the smaller head goes
/// through the matching one-sided policy. Once either slice is exhausted, the
/// tail of the other is appended or skipped in bulk.
///
/// Non-overlapping ranges (`left.last() < right.first()` or the reverse) skip
/// the comparison loop entirely.
///
/// # Complexity
///
/// O(n + m) comparisons, at most one allocation.
pub(crate) fn merge<T: Clone + Ord>(
    left: &[T],
    right: &[T],
    policy: MergePolicy,
) -> MergeOutcome<T> {
    match (left.first(), left.last(), right.first(), right.last()) {
        (None, _, None, _) => MergeOutcome::Left,
        (None, ..) => {
            if policy.right_only.emits() {
                MergeOutcome::Right
            } else {
                MergeOutcome::Left
            }
        }
        (_, _, None, _) => {
            if policy.left_only.emits() {
                MergeOutcome::Left
            } else {
                MergeOutcome::Right
            }
        }
        (Some(left_first), Some(left_last), Some(right_first), Some(right_last)) => {
            if left_last < right_first {
                concatenate_disjoint(left, right, policy.left_only, policy.right_only)
            } else if right_last < left_first {
                match concatenate_disjoint(right, left, policy.right_only, policy.left_only) {
                    MergeOutcome::Left => MergeOutcome::Right,
                    MergeOutcome::Right => MergeOutcome::Left,
                    built @ MergeOutcome::Built(_) => built,
                }
            } else {
                merge_overlapping(left, right, policy)
            }
        }
        _ => merge_overlapping(left, right, policy),
    }
}

/// Output for two non-empty slices where every element of `lower` precedes
/// every element of `upper`.
fn concatenate_disjoint<T: Clone>(
    lower: &[T],
    upper: &[T],
    lower_inclusion: Inclusion,
    upper_inclusion: Inclusion,
) -> MergeOutcome<T> {
    match (lower_inclusion, upper_inclusion) {
        (Inclusion::Emit, Inclusion::Emit) => {
            let mut output = Vec::with_capacity(lower.len() + upper.len());
            output.extend_from_slice(lower);
            output.extend_from_slice(upper);
            MergeOutcome::Built(output)
        }
        (Inclusion::Emit, Inclusion::Skip) => MergeOutcome::Left,
        (Inclusion::Skip, Inclusion::Emit) => MergeOutcome::Right,
        (Inclusion::Skip, Inclusion::Skip) => MergeOutcome::Built(Vec::new()),
    }
}

fn merge_overlapping<T: Clone + Ord>(
    left: &[T],
    right: &[T],
    policy: MergePolicy,
) -> MergeOutcome<T> {
    let mut sink = MergeSink::new(left, right, policy.capacity(left.len(), right.len()));
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Equal => {
                if policy.both.emits() {
                    sink.push(&left[left_index]);
                } else {
                    sink.settle(left_index, right_index, false, false);
                }
                left_index += 1;
                right_index += 1;
            }
            Ordering::Less => {
                if policy.left_only.emits() {
                    sink.settle(left_index, right_index, sink.tracks_left, false);
                    sink.push(&left[left_index]);
                } else {
                    sink.settle(left_index, right_index, false, sink.tracks_right);
                }
                left_index += 1;
            }
            Ordering::Greater => {
                if policy.right_only.emits() {
                    sink.settle(left_index, right_index, false, sink.tracks_right);
                    sink.push(&right[right_index]);
                } else {
                    sink.settle(left_index, right_index, sink.tracks_left, false);
                }
                right_index += 1;
            }
        }
    }

    if left_index < left.len() {
        if policy.left_only.emits() {
            sink.settle(left_index, right_index, sink.tracks_left, false);
            sink.extend(&left[left_index..]);
        } else {
            sink.settle(left_index, right_index, false, sink.tracks_right);
        }
    }
    if right_index < right.len() {
        if policy.right_only.emits() {
            sink.settle(left_index, right_index, false, sink.tracks_right);
            sink.extend(&right[right_index..]);
        } else {
            sink.settle(left_index, right_index, sink.tracks_left, false);
        }
    }

    sink.finish()
}

/// Returns `true` if every element of `left` occurs in `right`.
///
/// Stops at the first element of `left` that has no match.
pub(crate) fn is_subset<T: Ord>(left: &[T], right: &[T]) -> bool {
    if left.len() > right.len() {
        return false;
    }

    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Equal => {
                left_index += 1;
                right_index += 1;
            }
            Ordering::Less => return false,
            Ordering::Greater => right_index += 1,
        }
    }

    left_index == left.len()
}

/// Returns `true` if `left` and `right` have no element in common.
///
/// Stops at the first equal pair.
pub(crate) fn is_disjoint<T: Ord>(left: &[T], right: &[T]) -> bool {
    let (Some(left_first), Some(left_last), Some(right_first), Some(right_last)) =
        (left.first(), left.last(), right.first(), right.last())
    else {
        return true;
    };
    if left_last < right_first || right_last < left_first {
        return true;
    }

    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Equal => return false,
            Ordering::Less => left_index += 1,
            Ordering::Greater => right_index += 1,
        }
    }

    true
}

/// Sorts `elements` and drops every element equal to the one kept before it.
///
/// Inputs of length 0 or 1 are returned untouched. The sort is stable, so
/// among equal elements the first one in input order is kept.
pub(crate) fn normalize<T: Ord>(mut elements: Vec<T>) -> Vec<T> {
    if elements.len() <= 1 {
        return elements;
    }
    elements.sort();
    elements.dedup();
    elements
}

/// Index of the first element that is not strictly greater than its
/// predecessor, or `None` if the slice is strictly ascending.
pub(crate) fn first_unordered_index<T: Ord>(elements: &[T]) -> Option<usize> {
    elements
        .windows(2)
        .position(|window| window[0] >= window[1])
        .map(|position| position + 1)
}

#[inline]
pub(crate) fn is_strictly_ascending<T: Ord>(elements: &[T]) -> bool {
    first_unordered_index(elements).is_none()
}
