//! Foldable type class - reducing containers to summary values.
//!
//! This module provides the `Foldable` trait: strict left-to-right (and
//! right-to-left) reduction of a container into an accumulator, plus
//! monoid-directed folding.
//!
//! `fold_left` makes no assumption about the combining function beyond its
//! signature — in particular, no identity element is required; the caller
//! supplies the seed. When the target *is* a monoid, `fold_map` starts from
//! its identity element instead.
//!
//! # Properties
//!
//! `Foldable` has no formal laws as strict as the other type classes, but
//! implementations should satisfy:
//!
//! ## Seed preservation
//!
//! Folding an empty container returns the seed unchanged:
//!
//! ```text
//! empty.fold_left(seed, f) == seed
//! ```
//!
//! ## Strict left-to-right order
//!
//! ```text
//! accumulator_0 = seed
//! accumulator_{i+1} = f(accumulator_i, element_i)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use seqmonad::sequence::Sequence;
//! use seqmonad::typeclass::Foldable;
//!
//! let numbers: Sequence<i64> = (1..=5).collect();
//! let sum = numbers.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for containers that can be folded to a summary value.
///
/// # Examples
///
/// ```rust
/// use seqmonad::sequence::Sequence;
/// use seqmonad::typeclass::{Foldable, Sum};
///
/// let numbers: Sequence<i64> = (1..=4).collect();
///
/// // Seeded fold
/// let sum = numbers.clone().fold_left(0, |accumulator, element| accumulator + element);
/// assert_eq!(sum, 10);
///
/// // Monoid-directed fold
/// let sum: Sum<i64> = numbers.fold_map(Sum::new);
/// assert_eq!(sum.into_inner(), 10);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the container from left to right with an accumulator.
    ///
    /// Elements are processed strictly in order: the accumulator starts at
    /// `init` and each step computes `function(accumulator, element)`.
    /// Folding an empty container returns `init` unchanged.
    ///
    /// # Arguments
    ///
    /// * `init` - The seed accumulator value
    /// * `function` - The binary combining function
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::sequence::Sequence;
    /// use seqmonad::typeclass::Foldable;
    ///
    /// let values: Sequence<i64> = (1..=3).collect();
    /// let sum = values.fold_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 6);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the container from right to left with an accumulator.
    ///
    /// Implemented by reversing the iteration order.
    ///
    /// # Arguments
    ///
    /// * `init` - The seed accumulator value
    /// * `function` - A function taking an element and the accumulator
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::sequence::Sequence;
    /// use seqmonad::typeclass::Foldable;
    ///
    /// let values: Sequence<i64> = (1..=3).collect();
    /// // Builds "123" from the right: f(1, f(2, f(3, "")))
    /// let rendered = values.fold_right(String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(rendered, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a `Monoid` and combines all results, starting
    /// from the monoid's identity element.
    ///
    /// # Arguments
    ///
    /// * `function` - A function mapping each element to a monoid value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::sequence::Sequence;
    /// use seqmonad::typeclass::{Foldable, Product, Sum};
    ///
    /// let values: Sequence<i64> = (1..=4).collect();
    ///
    /// let sum: Sum<i64> = values.clone().fold_map(Sum::new);
    /// assert_eq!(sum.into_inner(), 10);
    ///
    /// let product: Product<i64> = values.fold_map(Product::new);
    /// assert_eq!(product.into_inner(), 24);
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
}
