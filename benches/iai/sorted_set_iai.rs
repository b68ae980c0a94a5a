//! IAI-Callgrind benchmark for SortedSet set algebra.
//!
//! Measures instruction counts for merges that return an input unchanged
//! versus merges that build a new array.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use sorted_array_set::persistent::SortedSet;
use std::hint::black_box;

fn setup_superset_and_subset(size: i32) -> (SortedSet<i32>, SortedSet<i32>) {
    let superset: SortedSet<i32> = (0..size).collect();
    let subset: SortedSet<i32> = (0..size).step_by(3).collect();
    (superset, subset)
}

fn setup_interleaved(size: i32) -> (SortedSet<i32>, SortedSet<i32>) {
    let evens: SortedSet<i32> = (0..size).map(|value| value * 2).collect();
    let odds: SortedSet<i32> = (0..size).map(|value| value * 2 + 1).collect();
    (evens, odds)
}

fn setup_shuffled(size: i32) -> Vec<i32> {
    (0..size).map(|value| (value * 7919) % size).collect()
}

#[library_benchmark]
#[bench::small(setup_superset_and_subset(100))]
#[bench::large(setup_superset_and_subset(10000))]
fn union_identity(sets: (SortedSet<i32>, SortedSet<i32>)) -> SortedSet<i32> {
    let (superset, subset) = sets;
    black_box(black_box(&subset).union(black_box(&superset)))
}

#[library_benchmark]
#[bench::small(setup_interleaved(100))]
#[bench::large(setup_interleaved(10000))]
fn union_interleaved(sets: (SortedSet<i32>, SortedSet<i32>)) -> SortedSet<i32> {
    let (evens, odds) = sets;
    black_box(black_box(&evens).union(black_box(&odds)))
}

#[library_benchmark]
#[bench::small(setup_superset_and_subset(100))]
#[bench::large(setup_superset_and_subset(10000))]
fn intersection_identity(sets: (SortedSet<i32>, SortedSet<i32>)) -> SortedSet<i32> {
    let (superset, subset) = sets;
    black_box(black_box(&superset).intersection(black_box(&subset)))
}

#[library_benchmark]
#[bench::small(setup_superset_and_subset(100))]
#[bench::large(setup_superset_and_subset(10000))]
fn symmetric_difference_built(sets: (SortedSet<i32>, SortedSet<i32>)) -> SortedSet<i32> {
    let (superset, subset) = sets;
    black_box(black_box(&superset).symmetric_difference(black_box(&subset)))
}

#[library_benchmark]
#[bench::small(setup_shuffled(100))]
#[bench::large(setup_shuffled(10000))]
fn from_shuffled(elements: Vec<i32>) -> SortedSet<i32> {
    black_box(SortedSet::from(black_box(elements)))
}

library_benchmark_group!(
    name = sorted_set_algebra_group;
    benchmarks =
        union_identity, union_interleaved,
        intersection_identity, symmetric_difference_built,
        from_shuffled
);

main!(library_benchmark_groups = sorted_set_algebra_group);
