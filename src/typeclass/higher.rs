//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `SortedSet<_>`
//! directly. [`TypeConstructor`] names the element type and lets a trait
//! talk about "the same container holding something else", which is what
//! [`Foldable`](super::Foldable) builds on.
//!
//! # Example
//!
//! ```rust
//! use sorted_array_set::persistent::SortedSet;
//! use sorted_array_set::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers = SortedSet::of([1, 2, 3]);
//! let names: SortedSet<String> = empty_like(&numbers);
//! assert!(names.is_empty());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `SortedSet<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` keeps the result a valid
    /// type constructor, so transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistent::SortedSet;
    use rstest::rstest;
    use std::any::TypeId;

    fn inner_type_id<T: TypeConstructor>() -> TypeId
    where
        T::Inner: 'static,
    {
        TypeId::of::<T::Inner>()
    }

    #[rstest]
    fn sorted_set_inner_type_is_element_type() {
        assert_eq!(inner_type_id::<SortedSet<i32>>(), TypeId::of::<i32>());
    }

    #[rstest]
    fn sorted_set_with_type_changes_element_type() {
        type Strings = <SortedSet<i32> as TypeConstructor>::WithType<String>;
        assert_eq!(TypeId::of::<Strings>(), TypeId::of::<SortedSet<String>>());
        assert_eq!(inner_type_id::<Strings>(), TypeId::of::<String>());
    }
}
