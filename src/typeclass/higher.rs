//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for emulating Higher-Kinded Types
//! (HKT) in Rust using Generic Associated Types (GAT). This is what lets the
//! type class traits talk about "the same container holding a different
//! element type" — the result-type deduction that bind needs in order to
//! take a transformation `T -> Sequence<U>` and return a `Sequence<U>`.
//!
//! # Background
//!
//! Rust does not natively support Higher-Kinded Types: there is no way to
//! abstract over `Sequence<_>` as a bare type constructor. This module uses
//! GAT to work around that limitation — the result container type is
//! explicitly parameterized through `WithType<B>` rather than inferred from
//! a call-expression pattern.
//!
//! # Example
//!
//! ```rust
//! use seqmonad::sequence::Sequence;
//! use seqmonad::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers: Sequence<i64> = (0..3).collect();
//! let strings: Sequence<String> = transform_type(numbers);
//! assert!(strings.is_empty());
//! ```

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. It allows abstracting over container constructors such as
/// `Sequence<_>`.
///
/// # Associated Types
///
/// - `Inner`: The element type this constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should
///    be equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use seqmonad::sequence::Sequence;
/// use seqmonad::typeclass::TypeConstructor;
///
/// fn example<T: TypeConstructor<Inner = i64>>() {
///     // T::WithType<String> is the same constructor applied to String
/// }
///
/// example::<Sequence<i64>>();
/// ```
pub trait TypeConstructor {
    /// The element type that this type constructor is applied to.
    ///
    /// For example, for `Sequence<i64>`, this is `i64`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Sequence<i64>`, `WithType<String>` is
    /// `Sequence<String>`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` ensures that the
    /// resulting type is itself a valid type constructor, so that
    /// transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Sequence;

    /// Verifies that `Sequence<i64>` has the correct `Inner` type.
    #[test]
    fn sequence_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i64>>() {}
        assert_inner::<Sequence<i64>>();
    }

    /// Verifies that `Sequence`'s `WithType` produces the correct type.
    #[test]
    fn sequence_with_type_produces_correct_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let result: Sequence<String> = transform(Sequence::singleton(42));
        assert!(result.is_empty());
    }

    /// Tests chaining `WithType` transformations.
    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Sequence<i64> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_sequence_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_sequence_bool::<Step2>();
    }

    /// Nested constructors are themselves type constructors.
    #[test]
    fn nested_type_constructor_works() {
        fn assert_inner<T: TypeConstructor<Inner = Sequence<i64>>>() {}
        assert_inner::<Sequence<Sequence<i64>>>();
    }
}
