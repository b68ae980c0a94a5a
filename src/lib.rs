//! # sorted-array-set
//!
//! A persistent ordered set backed by a single sorted array, with set
//! algebra that preserves identity.
//!
//! ## Overview
//!
//! - **Persistent Sorted Set**: [`SortedSet`](persistent::SortedSet), an
//!   immutable set whose operations return one of their inputs whenever the
//!   result would be identical to it
//! - **Transient Builder**: [`TransientSortedSet`](persistent::TransientSortedSet)
//!   for batch construction
//! - **Type Classes**: `Semigroup`, `Monoid` and `Foldable` instances for the
//!   set
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): Type class traits and their set instances
//! - `arc`: Use `Arc` instead of `Rc`, making sets `Send + Sync`
//! - `serde`: Serialize sets as sequences; deserialization sorts and dedups
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sorted_array_set::prelude::*;
//!
//! let subset = SortedSet::of(["b", "c", "d"]);
//! let superset = SortedSet::of(["a", "b", "c", "d", "e"]);
//!
//! let union = subset.union(&superset);
//! assert!(union.ptr_eq(&superset));
//! assert!(subset.is_subset(&superset));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use sorted_array_set::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub mod persistent;
