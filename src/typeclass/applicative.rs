//! Applicative type class - lifting values and combining independent
//! containers.
//!
//! This module provides the `Applicative` trait, which extends `Functor`
//! with two capabilities:
//!
//! - `pure`: lifting a plain value into the container (the monadic *unit*)
//! - `map2`: combining two containers with a binary function
//!
//! For an ordered sequence, `map2` is the cartesian combination: every
//! element of the left sequence is paired with every element of the right
//! sequence, left-major order. This is exactly the structure of a double
//! summation `ΣᵢΣⱼ f(xᵢ, yⱼ)`, which the identity checks rely on.
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy:
//!
//! ## Identity
//!
//! ```text
//! Self::pure(x) == unit-wrapped x (a one-element container)
//! ```
//!
//! ## Homomorphism (via map2)
//!
//! ```text
//! Self::pure(a).map2(Self::pure(b), f) == Self::pure(f(a, b))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use seqmonad::sequence::Sequence;
//! use seqmonad::typeclass::Applicative;
//!
//! // Lifting a pure value
//! let unit: Sequence<i64> = Sequence::<()>::pure(42);
//! assert_eq!(unit, Sequence::singleton(42));
//!
//! // Cartesian combination of two sequences
//! let left: Sequence<i64> = (1..=2).collect();
//! let right: Sequence<i64> = (10..=11).collect();
//! let sums = left.map2(right, |a, b| a + b);
//! assert_eq!(sums, [11, 12, 12, 13].into_iter().collect());
//! ```

use super::functor::Functor;

/// A type class for containers supporting value lifting and pairwise
/// combination.
///
/// # Examples
///
/// ```rust
/// use seqmonad::sequence::Sequence;
/// use seqmonad::typeclass::Applicative;
///
/// let x: Sequence<i64> = Sequence::<()>::pure(5);
/// assert_eq!(x.len(), 1);
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the container.
    ///
    /// This is the monadic **unit**: the result is a newly allocated
    /// one-element container holding exactly `value`. Total for all
    /// representable values, no side effects.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to lift
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::sequence::Sequence;
    /// use seqmonad::typeclass::Applicative;
    ///
    /// let lifted: Sequence<&str> = Sequence::<()>::pure("hello");
    /// assert_eq!(lifted, Sequence::singleton("hello"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers with a binary function.
    ///
    /// For sequences this is the cartesian combination in left-major order:
    /// the result holds `function(a, b)` for every `a` in `self` and every
    /// `b` in `other`, with the right sequence cycling fastest. Both element
    /// types must be `Clone` because each element participates in several
    /// pairings.
    ///
    /// # Arguments
    ///
    /// * `other` - The second container
    /// * `function` - The binary combining function
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::sequence::Sequence;
    /// use seqmonad::typeclass::Applicative;
    ///
    /// let xs: Sequence<i64> = (0..3).collect();
    /// let pairs = xs.clone().map2(xs, |a, b| (a, b));
    /// assert_eq!(pairs.len(), 9);
    /// assert_eq!(pairs.front(), Some(&(0, 0)));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        Self::Inner: Clone,
        B: Clone,
        F: FnMut(Self::Inner, B) -> C;
}
