//! Type class traits giving the sequence container its monadic structure.
//!
//! This module provides the fundamental type classes:
//!
//! - [`Functor`]: mapping over container values (fmap)
//! - [`Applicative`]: lifting values (unit) and cartesian combination
//! - [`Monad`]: sequencing container-producing computations (bind, join)
//! - [`Foldable`]: left-to-right reduction into summary values (foldl)
//! - [`Semigroup`]: associative binary operations
//! - [`Monoid`]: semigroups with an identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT). This
//! crate uses Generic Associated Types (GAT) via [`TypeConstructor`] to
//! emulate HKT behavior, so that bind's result container type is explicitly
//! parameterized rather than inferred from a call-expression pattern.
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: trait for emulating higher-kinded types
//! - [`Sum`], [`Product`]: numeric wrappers selecting the additive and
//!   multiplicative monoids
//!
//! # Examples
//!
//! ```rust
//! use seqmonad::sequence::Sequence;
//! use seqmonad::typeclass::{Foldable, Monad};
//!
//! let numbers: Sequence<i64> = (1..=3).collect();
//! let doubled_sum = numbers
//!     .flat_map(|n| Sequence::singleton(n + n))
//!     .fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(doubled_sum, 12);
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
