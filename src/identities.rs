//! Summation identities phrased through the monadic primitives.
//!
//! These checks exercise bind, fmap, fold, and the cartesian `map2` against
//! closed-form arithmetic: the sum of doubles and the sum of squares of an
//! integer sequence `0, 1, ..., n-1`, and the Lagrange identity relating
//! the sum of squares, the square of the sum, and the pairwise squared
//! differences:
//!
//! ```text
//! n · Σᵢ xᵢ² − (Σᵢ xᵢ)² = ½ · ΣᵢΣⱼ (xᵢ − xⱼ)²
//! ```
//!
//! They are sanity checks on the primitive operations, not separate
//! subsystems: a failure here means bind, fold, or map dropped, duplicated,
//! or reordered an element.
//!
//! # Overflow
//!
//! Accumulator arithmetic is unguarded. The element type is `i64`
//! deliberately: growing the sequence far enough overflows the larger
//! compositions (the square of the sum grows with n⁴). Callers keep the
//! sequence within the demonstration scale; this is a documented
//! precondition rather than a runtime check.
//!
//! # Examples
//!
//! ```rust
//! use seqmonad::identities::{
//!     lagrange_identity_holds, sum_of_doubles_matches, sum_of_squares_matches,
//! };
//! use seqmonad::sequence::Sequence;
//!
//! let sequence: Sequence<i64> = (0..100).collect();
//! assert!(sum_of_doubles_matches(&sequence));
//! assert!(sum_of_squares_matches(&sequence));
//! assert!(lagrange_identity_holds(&sequence));
//! ```

use crate::sequence::Sequence;
use crate::typeclass::{Applicative, Foldable, Functor, Monad, Sum};

/// Returns the `n`-th triangular number `n(n+1)/2`, the closed form of
/// `0 + 1 + ... + n`.
///
/// # Examples
///
/// ```rust
/// use seqmonad::identities::triangular;
///
/// assert_eq!(triangular(4), 10);
/// assert_eq!(triangular(99), 4950);
/// ```
#[must_use]
pub const fn triangular(n: i64) -> i64 {
    n * (n + 1) / 2
}

/// Returns the `n`-th square pyramidal number `n(n+1)(2n+1)/6`, the closed
/// form of `0² + 1² + ... + n²`.
///
/// # Examples
///
/// ```rust
/// use seqmonad::identities::square_pyramidal;
///
/// assert_eq!(square_pyramidal(4), 30);
/// assert_eq!(square_pyramidal(99), 328_350);
/// ```
#[must_use]
pub const fn square_pyramidal(n: i64) -> i64 {
    n * (n + 1) * (2 * n + 1) / 6
}

/// Sums a sequence through the additive monoid.
fn total(sequence: Sequence<i64>) -> i64 {
    sequence.fold_map(Sum::new).into_inner()
}

/// Counts elements by folding, so the count stays in `i64` arithmetic.
fn element_count(sequence: &Sequence<i64>) -> i64 {
    sequence.clone().fold_left(0, |count, _| count + 1)
}

/// Checks that the sum of doubles of `0, 1, ..., n-1` — computed by binding
/// the doubling transformation and folding the result — matches
/// `2 · triangular(n-1)`.
///
/// Holds for the empty sequence (both sides are zero).
///
/// # Examples
///
/// ```rust
/// use seqmonad::identities::sum_of_doubles_matches;
/// use seqmonad::sequence::Sequence;
///
/// let sequence: Sequence<i64> = (0..100).collect();
/// assert!(sum_of_doubles_matches(&sequence));
/// ```
#[must_use]
pub fn sum_of_doubles_matches(sequence: &Sequence<i64>) -> bool {
    let count = element_count(sequence);
    let doubled = sequence
        .clone()
        .flat_map(|element| Sequence::singleton(element + element));
    total(doubled) == 2 * triangular(count - 1)
}

/// Checks that the sum of squares of `0, 1, ..., n-1` — computed by binding
/// the squaring transformation and folding the result — matches
/// `square_pyramidal(n-1)`.
///
/// # Examples
///
/// ```rust
/// use seqmonad::identities::sum_of_squares_matches;
/// use seqmonad::sequence::Sequence;
///
/// let sequence: Sequence<i64> = (0..100).collect();
/// assert!(sum_of_squares_matches(&sequence));
/// ```
#[must_use]
pub fn sum_of_squares_matches(sequence: &Sequence<i64>) -> bool {
    let count = element_count(sequence);
    let squared = sequence
        .clone()
        .flat_map(|element| Sequence::singleton(element * element));
    total(squared) == square_pyramidal(count - 1)
}

/// Checks the Lagrange identity
/// `n · Σ(x²) − (Σx)² == ½ · ΣᵢΣⱼ (xᵢ − xⱼ)²` over the sequence.
///
/// The left side is built from `fmap` and folding; the pairwise double sum
/// on the right is the cartesian `map2` of the sequence with itself. Holds
/// for any integer sequence (not just `0..n`) as long as nothing overflows,
/// and for the empty sequence (both sides are zero).
///
/// # Examples
///
/// ```rust
/// use seqmonad::identities::lagrange_identity_holds;
/// use seqmonad::sequence::Sequence;
///
/// let sequence: Sequence<i64> = (0..100).collect();
/// assert!(lagrange_identity_holds(&sequence));
/// ```
#[must_use]
pub fn lagrange_identity_holds(sequence: &Sequence<i64>) -> bool {
    let count = element_count(sequence);
    let sum_of_squares = total(sequence.clone().fmap(|element| element * element));
    let sum = total(sequence.clone());
    let pairwise_spread = total(sequence.clone().map2(sequence.clone(), |left, right| {
        let difference = left - right;
        difference * difference
    }));
    count * sum_of_squares - sum * sum == pairwise_spread / 2
}
