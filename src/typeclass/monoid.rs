//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a semigroup together with an identity element `empty` that
//! is neutral on both sides of `combine`.
//!
//! # Laws
//!
//! All implementations must satisfy (in addition to the `Semigroup` laws):
//!
//! ## Left Identity
//!
//! For all `a`:
//! ```text
//! Self::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! For all `a`:
//! ```text
//! a.combine(Self::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use seqmonad::sequence::Sequence;
//! use seqmonad::typeclass::{Monoid, Semigroup};
//!
//! let sequence: Sequence<i64> = (0..3).collect();
//! assert_eq!(Sequence::empty().combine(sequence.clone()), sequence);
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Product, Sum};

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use seqmonad::typeclass::{Monoid, Semigroup, Sum};
///
/// // Combining with empty yields the original value
/// let value = Sum::new(5);
/// assert_eq!(Sum::empty().combine(value), value);
/// assert_eq!(value.combine(Sum::empty()), value);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// The identity element satisfies:
    /// - `Self::empty().combine(a) == a` for all `a`
    /// - `a.combine(Self::empty()) == a` for all `a`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::typeclass::{Monoid, Product, Sum};
    ///
    /// assert_eq!(Sum::<i64>::empty(), Sum::new(0));
    /// assert_eq!(Product::<i64>::empty(), Product::new(1));
    /// ```
    fn empty() -> Self;

    /// Combines all elements of an iterator, starting from the identity
    /// element.
    ///
    /// An empty iterator yields the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::typeclass::{Monoid, Sum};
    ///
    /// let values = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
    /// assert_eq!(Sum::combine_all(values), Sum::new(6));
    ///
    /// let none: Vec<Sum<i64>> = vec![];
    /// assert_eq!(Sum::combine_all(none), Sum::empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::typeclass::{Monoid, Sum};
    ///
    /// assert!(Sum::<i64>::empty().is_empty_value());
    /// assert!(!Sum::new(5).is_empty_value());
    /// ```
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

// =============================================================================
// Sum Implementation
// =============================================================================

/// The additive monoid: the identity element is zero.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

// =============================================================================
// Product Implementations
//
// The multiplicative identity cannot come from Default (that would be zero
// for the numeric types), so the instances are written per type.
// =============================================================================

impl Monoid for Product<i32> {
    fn empty() -> Self {
        Self(1)
    }
}

impl Monoid for Product<i64> {
    fn empty() -> Self {
        Self(1)
    }
}
