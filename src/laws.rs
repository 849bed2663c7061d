//! Runtime verification of the monad laws for [`Sequence`].
//!
//! The triple (`Sequence`, unit, bind) is a monad exactly when the three
//! Kleisli laws hold:
//!
//! - **Left identity**: `unit(x).flat_map(f) == f(x)`
//! - **Right identity**: `xs.flat_map(unit) == xs`
//! - **Associativity**:
//!   `xs.flat_map(g).flat_map(f) == xs.flat_map(|y| g(y).flat_map(f))`
//!
//! The functions here check the laws at runtime over concrete values and
//! sequences; [`monad_laws_hold`] folds a boolean AND of all three laws,
//! checked pointwise for every element of a test sequence.
//!
//! Right identity is checked in its generic form (`xs.flat_map(unit) == xs`
//! for any `xs`), not against any particular unit overload.
//!
//! Transformations are assumed pure: applying one must not consume or
//! mutate state shared with another application, or the comparisons here
//! are meaningless.
//!
//! # Examples
//!
//! ```rust
//! use seqmonad::laws::monad_laws_hold;
//! use seqmonad::sequence::Sequence;
//!
//! let sequence: Sequence<i64> = (0..100).collect();
//! let square = |x: i64| Sequence::singleton(x * x);
//! let double = |x: i64| Sequence::singleton(x + x);
//!
//! assert!(monad_laws_hold(&sequence, square, double));
//! ```

use crate::sequence::Sequence;
use crate::typeclass::{Foldable, Monad};

/// Checks the left identity law for one value and one transformation:
/// `unit(x).flat_map(f) == f(x)`.
///
/// # Examples
///
/// ```rust
/// use seqmonad::laws::left_identity;
/// use seqmonad::sequence::Sequence;
///
/// assert!(left_identity(7, |x: i64| Sequence::singleton(x * x)));
/// ```
pub fn left_identity<A, B, F>(value: A, mut transformation: F) -> bool
where
    A: Clone,
    B: PartialEq,
    F: FnMut(A) -> Sequence<B>,
{
    Sequence::singleton(value.clone()).flat_map(&mut transformation) == transformation(value)
}

/// Checks the right identity law for a whole sequence:
/// `xs.flat_map(unit) == xs`.
///
/// Holds for the empty sequence as well.
///
/// # Examples
///
/// ```rust
/// use seqmonad::laws::right_identity;
/// use seqmonad::sequence::Sequence;
///
/// let sequence: Sequence<i64> = (0..10).collect();
/// assert!(right_identity(&sequence));
/// assert!(right_identity(&Sequence::<i64>::new()));
/// ```
pub fn right_identity<A>(sequence: &Sequence<A>) -> bool
where
    A: Clone + PartialEq,
{
    sequence.clone().flat_map(Sequence::singleton) == *sequence
}

/// Checks the associativity law over an arbitrary source sequence:
/// `xs.flat_map(inner).flat_map(outer) ==
/// xs.flat_map(|y| inner(y).flat_map(outer))`.
///
/// The pointwise form of the law is the `xs = unit(x)` instance.
///
/// # Examples
///
/// ```rust
/// use seqmonad::laws::associativity;
/// use seqmonad::sequence::Sequence;
///
/// let sequence: Sequence<i64> = (0..10).collect();
/// let square = |x: i64| Sequence::singleton(x * x);
/// let double = |x: i64| Sequence::singleton(x + x);
/// assert!(associativity(&sequence, square, double));
/// ```
pub fn associativity<A, B, C, F, G>(sequence: &Sequence<A>, mut outer: F, mut inner: G) -> bool
where
    A: Clone,
    C: PartialEq,
    F: FnMut(B) -> Sequence<C>,
    G: FnMut(A) -> Sequence<B>,
{
    let chained = sequence
        .clone()
        .flat_map(&mut inner)
        .flat_map(&mut outer);
    let composed = sequence
        .clone()
        .flat_map(|element| inner(element).flat_map(&mut outer));
    chained == composed
}

/// Checks all three monad laws pointwise for every element of the test
/// sequence, folding a boolean AND across the checks.
///
/// For each element `x`, verifies left identity of `f` at `x`, right
/// identity of `unit(x)`, and associativity of `f` after `g` at `unit(x)`.
/// Returns `true` iff every check passes; vacuously `true` for the empty
/// sequence.
///
/// # Examples
///
/// ```rust
/// use seqmonad::laws::monad_laws_hold;
/// use seqmonad::sequence::Sequence;
///
/// let sequence: Sequence<i64> = (0..100).collect();
/// let square = |x: i64| Sequence::singleton(x * x);
/// let double = |x: i64| Sequence::singleton(x + x);
/// assert!(monad_laws_hold(&sequence, square, double));
/// ```
pub fn monad_laws_hold<A, F, G>(sequence: &Sequence<A>, mut f: F, mut g: G) -> bool
where
    A: Clone + PartialEq,
    F: FnMut(A) -> Sequence<A>,
    G: FnMut(A) -> Sequence<A>,
{
    sequence.clone().fold_left(true, |all_hold, element| {
        all_hold
            && left_identity(element.clone(), &mut f)
            && right_identity(&Sequence::singleton(element.clone()))
            && associativity(&Sequence::singleton(element), &mut f, &mut g)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(-5)]
    #[case(1000)]
    fn left_identity_holds_for_sample_values(#[case] value: i64) {
        assert!(left_identity(value, |x| Sequence::singleton(x * x)));
        assert!(left_identity(value, |x| [x, x + 1].into_iter().collect()));
    }

    #[rstest]
    fn right_identity_holds_for_empty_sequence() {
        assert!(right_identity(&Sequence::<i64>::new()));
    }

    #[rstest]
    fn right_identity_holds_for_generated_sequence() {
        let sequence: Sequence<i64> = (0..50).collect();
        assert!(right_identity(&sequence));
    }

    #[rstest]
    fn associativity_holds_for_block_transformations() {
        let sequence: Sequence<i64> = (0..20).collect();
        let expand = |x: i64| [x, x + 1].into_iter().collect::<Sequence<i64>>();
        let negate = |x: i64| Sequence::singleton(-x);
        assert!(associativity(&sequence, expand, negate));
    }

    #[rstest]
    fn laws_hold_over_the_driver_sequence() {
        let sequence: Sequence<i64> = (0..100).collect();
        let square = |x: i64| Sequence::singleton(x * x);
        let double = |x: i64| Sequence::singleton(x + x);
        assert!(monad_laws_hold(&sequence, square, double));
    }

    #[rstest]
    fn laws_hold_vacuously_for_empty_sequence() {
        let sequence: Sequence<i64> = Sequence::new();
        let square = |x: i64| Sequence::singleton(x * x);
        let double = |x: i64| Sequence::singleton(x + x);
        assert!(monad_laws_hold(&sequence, square, double));
    }
}
