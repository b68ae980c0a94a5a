//! Integration tests for sharing SortedSet across threads.
//!
//! These tests only build with the `arc` feature, which backs every set with
//! `Arc` instead of `Rc`.

#![cfg(feature = "arc")]
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use rstest::rstest;
use sorted_array_set::persistent::SortedSet;
use std::thread;

#[rstest]
fn test_sorted_set_cross_thread_structural_sharing() {
    let original = SortedSet::of([10, 20, 30]);

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let shared = original.clone();
            thread::spawn(move || {
                let extended = shared.add(index);
                assert!(extended.has(&index));
                assert_eq!(extended.len(), 4);
                assert_eq!(shared.len(), 3);
                extended
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    for (index, set) in results.iter().enumerate() {
        assert_eq!(set.first(), Some(&(index as i32)));
    }
    assert_eq!(original.as_slice(), &[10, 20, 30]);
}

#[rstest]
fn test_sorted_set_identity_survives_thread_boundary() {
    let superset = SortedSet::of(["a", "b", "c", "d"]);
    let subset = SortedSet::of(["b", "c"]);

    let handle = {
        let superset = superset.clone();
        thread::spawn(move || superset.union(&subset))
    };
    let union = handle.join().expect("Thread panicked");

    assert!(union.ptr_eq(&superset));
}

#[rstest]
fn test_sorted_set_concurrent_reads() {
    let set: SortedSet<u32> = (0..1_000).collect();

    thread::scope(|scope| {
        for offset in 0..4 {
            let set = &set;
            scope.spawn(move || {
                for key in (offset..1_000).step_by(4) {
                    assert!(set.has(&key));
                }
                assert!(!set.has(&1_000));
            });
        }
    });
}
