//! Monad type class - sequencing computations within a container.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! `flat_map` (bind): applying a container-producing transformation to every
//! element and splicing the per-element results together in source order.
//!
//! Together with `pure`, `flat_map` forms a Kleisli triple. `flatten`
//! (join) falls out as bind with the identity transformation, and `fmap`
//! can be recovered as bind composed with unit — the sequence instance in
//! [`crate::sequence`] is defined exactly that way.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! Lifting a value and binding a transformation is the same as applying the
//! transformation directly:
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! Binding `pure` returns the original container:
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! Binding operations can be reassociated:
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! The [`crate::laws`] module checks all three at runtime; the integration
//! tests check them property-based.
//!
//! # Examples
//!
//! ```rust
//! use seqmonad::sequence::Sequence;
//! use seqmonad::typeclass::Monad;
//!
//! let numbers: Sequence<i64> = (1..=3).collect();
//! let expanded = numbers.flat_map(|n| [n, n * 10].into_iter().collect());
//! assert_eq!(expanded, [1, 10, 2, 20, 3, 30].into_iter().collect());
//! ```

use super::applicative::Applicative;

/// A type class for containers that support sequencing of
/// container-producing computations.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.flat_map(pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
///
/// # Examples
///
/// ```rust
/// use seqmonad::sequence::Sequence;
/// use seqmonad::typeclass::Monad;
///
/// let numbers: Sequence<i64> = (0..3).collect();
/// let kept = numbers.flat_map(|n| {
///     if n % 2 == 0 {
///         Sequence::singleton(n)
///     } else {
///         Sequence::new()
///     }
/// });
/// assert_eq!(kept, [0, 2].into_iter().collect());
/// ```
pub trait Monad: Applicative {
    /// Applies a container-producing function to every element and splices
    /// the results together in source order.
    ///
    /// This is the fundamental **bind** operation. The result length equals
    /// the sum of the per-element result lengths, and each per-element block
    /// appears in the position corresponding to its source element.
    ///
    /// In Haskell this is `>>=`; on Rust iterators the closest relative is
    /// `flat_map`.
    ///
    /// # Arguments
    ///
    /// * `function` - A function from an element to a new container
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::sequence::Sequence;
    /// use seqmonad::typeclass::Monad;
    ///
    /// let numbers: Sequence<i64> = (1..=2).collect();
    /// let result = numbers.flat_map(|n| Sequence::singleton(n * n));
    /// assert_eq!(result, [1, 4].into_iter().collect());
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    ///
    /// Provided for familiarity with `Option::and_then` and
    /// `Result::and_then`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::sequence::Sequence;
    /// use seqmonad::typeclass::Monad;
    ///
    /// let numbers: Sequence<i64> = (1..=2).collect();
    /// let result = numbers.and_then(|n| Sequence::singleton(n + 1));
    /// assert_eq!(result, [2, 3].into_iter().collect());
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two containers, discarding the elements of the first.
    ///
    /// For every element of `self`, the entire `next` container is spliced
    /// into the result, so a sequence of length `n` produces
    /// `n * next.len()` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::sequence::Sequence;
    /// use seqmonad::typeclass::Monad;
    ///
    /// let first: Sequence<i64> = (0..2).collect();
    /// let second: Sequence<&str> = ["a", "b"].into_iter().collect();
    /// assert_eq!(first.then(second), ["a", "b", "a", "b"].into_iter().collect());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Flattens a nested container one level.
    ///
    /// This is the monadic **join**, defined as bind with the identity
    /// transformation. Outer order is preserved, then inner order within
    /// each block.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::sequence::Sequence;
    /// use seqmonad::typeclass::Monad;
    ///
    /// let nested: Sequence<Sequence<i64>> = [
    ///     (1..=2).collect(),
    ///     (3..=4).collect(),
    /// ]
    /// .into_iter()
    /// .collect();
    /// let flat: Sequence<i64> = nested.flatten();
    /// assert_eq!(flat, (1..=4).collect());
    /// ```
    #[inline]
    fn flatten<B>(self) -> Self::WithType<B>
    where
        Self: Sized,
        Self::Inner: Into<Self::WithType<B>>,
    {
        self.flat_map(|nested| nested.into())
    }
}
