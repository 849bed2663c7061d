//! Demonstration driver: checks the monad laws and the summation
//! identities over the integer sequence `0, 1, ..., 99` and prints one
//! pass/fail line per check.
//!
//! Takes no input and no flags; the only output is stdout. Exit status is
//! always normal — a failed check is reported as text, not as a process
//! failure.

use seqmonad::identities::{
    lagrange_identity_holds, sum_of_doubles_matches, sum_of_squares_matches,
};
use seqmonad::laws::monad_laws_hold;
use seqmonad::sequence::Sequence;

fn main() {
    // i64 elements on purpose: grow the sequence far enough and the larger
    // compositions overflow, which is part of the demonstration.
    let sequence: Sequence<i64> = (0..100).collect();
    let last = sequence.len().saturating_sub(1);

    let square = |x: i64| Sequence::singleton(x * x);
    let double = |x: i64| Sequence::singleton(x + x);

    println!(
        "monad laws (left identity, right identity, associativity) over 0..={last}: {}",
        monad_laws_hold(&sequence, square, double)
    );
    println!(
        "sum of doubles of 0..={last} matches 2 * triangular(n - 1): {}",
        sum_of_doubles_matches(&sequence)
    );
    println!(
        "sum of squares of 0..={last} matches square_pyramidal(n - 1): {}",
        sum_of_squares_matches(&sequence)
    );
    println!(
        "lagrange identity (n * sum of squares - square of sum == half pairwise spread): {}",
        lagrange_identity_holds(&sequence)
    );
}
