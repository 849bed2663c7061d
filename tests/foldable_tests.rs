//! Tests for folding sequences: seeded folds, monoid-directed folds, and
//! the numeric wrapper monoids.

use rstest::rstest;
use seqmonad::sequence::Sequence;
use seqmonad::typeclass::{Foldable, Monoid, Product, Semigroup, Sum};

// =============================================================================
// Seeded Folds
// =============================================================================

#[rstest]
fn fold_left_accumulates_front_to_back() {
    let sequence: Sequence<i64> = (1..=4).collect();
    let differences = sequence.fold_left(100, |accumulator, element| accumulator - element);
    // ((((100 - 1) - 2) - 3) - 4)
    assert_eq!(differences, 90);
}

#[rstest]
fn fold_right_accumulates_back_to_front() {
    let sequence: Sequence<i64> = (1..=3).collect();
    let rendered = sequence.fold_right(String::from("|"), |element, accumulator| {
        format!("{accumulator}{element}")
    });
    assert_eq!(rendered, "|321");
}

#[rstest]
#[case(0)]
#[case(-42)]
#[case(i64::MAX)]
fn fold_left_on_empty_returns_seed_unchanged(#[case] seed: i64) {
    let sequence: Sequence<i64> = Sequence::new();
    assert_eq!(
        sequence.fold_left(seed, |accumulator, element| accumulator + element),
        seed
    );
}

#[rstest]
fn fold_left_agrees_with_iterator_fold() {
    let sequence: Sequence<i64> = (0..50).collect();
    let via_foldable = sequence
        .clone()
        .fold_left(0, |accumulator, element| accumulator + element);
    let via_iterator = sequence.into_iter().fold(0, |accumulator, element| {
        accumulator + element
    });
    assert_eq!(via_foldable, via_iterator);
}

// =============================================================================
// Monoid-Directed Folds
// =============================================================================

#[rstest]
fn fold_map_sum_agrees_with_seeded_fold() {
    let sequence: Sequence<i64> = (1..=10).collect();
    let via_monoid: Sum<i64> = sequence.clone().fold_map(Sum::new);
    let via_seed = sequence.fold_left(0, |accumulator, element| accumulator + element);
    assert_eq!(via_monoid.into_inner(), via_seed);
}

#[rstest]
fn fold_map_product_starts_from_one() {
    let sequence: Sequence<i64> = (1..=5).collect();
    let factorial: Product<i64> = sequence.fold_map(Product::new);
    assert_eq!(factorial.into_inner(), 120);

    let empty: Sequence<i64> = Sequence::new();
    let identity: Product<i64> = empty.fold_map(Product::new);
    assert_eq!(identity, Product::empty());
}

#[rstest]
fn fold_map_on_empty_yields_the_identity_element() {
    let sequence: Sequence<i64> = Sequence::new();
    let sum: Sum<i64> = sequence.fold_map(Sum::new);
    assert_eq!(sum, Sum::empty());
}

// =============================================================================
// Wrapper Monoids
// =============================================================================

#[rstest]
fn sum_and_product_have_distinct_identities() {
    // Addition and multiplication have different identity elements (zero
    // vs one), which is why the wrappers are distinct types.
    assert_eq!(Sum::<i64>::empty().into_inner(), 0);
    assert_eq!(Product::<i64>::empty().into_inner(), 1);
}

#[rstest]
fn combine_all_sums_and_multiplies() {
    let sums = (1..=4).map(Sum::new);
    assert_eq!(Sum::combine_all(sums), Sum::new(10_i64));

    let products = (1..=4).map(Product::new);
    assert_eq!(Product::combine_all(products), Product::new(24_i64));
}

#[rstest]
fn sum_combine_is_associative_over_samples() {
    let samples = [-3_i64, 0, 7, 100];
    for &a in &samples {
        for &b in &samples {
            for &c in &samples {
                let left = Sum::new(a).combine(Sum::new(b)).combine(Sum::new(c));
                let right = Sum::new(a).combine(Sum::new(b).combine(Sum::new(c)));
                assert_eq!(left, right);
            }
        }
    }
}
