//! # seqmonad
//!
//! Sequence monad primitives for Rust: an ordered sequence container, the
//! type classes that give it monadic structure, runtime verification of the
//! monad laws, and a handful of summation identities derived from the
//! primitives.
//!
//! ## Overview
//!
//! The crate is built around five operations over [`sequence::Sequence`]:
//!
//! - **unit** ([`sequence::Sequence::singleton`] / [`typeclass::Applicative::pure`]):
//!   lifts a value into a one-element sequence.
//! - **bind** ([`typeclass::Monad::flat_map`]): applies a sequence-producing
//!   transformation to every element and concatenates the results in order.
//! - **join** ([`typeclass::Monad::flatten`]): collapses one level of
//!   nesting, defined as bind with the identity transformation.
//! - **fmap** ([`typeclass::Functor::fmap`]): applies an ordinary
//!   transformation to every element, defined as bind composed with unit.
//! - **foldl** ([`typeclass::Foldable::fold_left`]): strict left-to-right
//!   reduction into an accumulator.
//!
//! The [`laws`] module checks the three monad laws (left identity, right
//! identity, associativity) at runtime over arbitrary test sequences, and
//! the [`identities`] module verifies closed-form summation identities
//! phrased entirely through the primitives.
//!
//! ## Example
//!
//! ```rust
//! use seqmonad::prelude::*;
//!
//! let sequence: Sequence<i64> = (0..100).collect();
//!
//! let square = |x: i64| Sequence::singleton(x * x);
//! let double = |x: i64| Sequence::singleton(x + x);
//!
//! assert!(monad_laws_hold(&sequence, square, double));
//! assert!(sum_of_squares_matches(&sequence));
//! ```
//!
//! ## Overflow
//!
//! Accumulator arithmetic is deliberately unguarded: elements are `i64` and
//! the identity checks multiply sums together, so very long sequences can
//! overflow. Keeping the sequence within the demonstration scale (hundreds
//! of elements) is a documented precondition, not a checked one.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use seqmonad::prelude::*;
/// ```
pub mod prelude {
    pub use crate::identities::*;
    pub use crate::laws::*;
    pub use crate::sequence::*;
    pub use crate::typeclass::*;
}

pub mod identities;
pub mod laws;
pub mod sequence;
pub mod typeclass;
