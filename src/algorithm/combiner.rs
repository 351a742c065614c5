//! Recursive enumeration of pairwise merges within one rectangle cluster
//!
//! For a list `[A, rest..]` every combo of `rest` is enumerated first; then
//! `A` is paired with each member `R` of each such combo, either kept apart
//! from `R` or merged with it when the two share a full edge. Each round of
//! [`combine`] therefore performs at most one merge involving `A`, on top of
//! whatever merges the recursion performed among `rest`. Repeated application
//! (see [`crate::algorithm::driver`]) reaches merges between rectangles that
//! were themselves produced by earlier merges.
//!
//! A single round can depend on input order, since only the first rectangle
//! is merged with a partner from the recursion. The driver's stop rule can
//! then end early for some orders: a row of three listed middle first stops at
//! two rectangles. Callers should not rely on order independence.

use crate::algorithm::combo::{Combo, ComboCollection};
use crate::spatial::adjacency::merge;
use crate::spatial::rectangle::{Coordinate, Rectangle};

/// Enumerate every distinct combo reachable by optionally merging pairs
///
/// - zero or one rectangle: the input itself is the only combo
/// - two rectangles: the unmerged pair, plus the merged rectangle when the
///   pair shares a full edge
/// - more: recursive composition as described in the module docs
///
/// The unmerged input is always part of the result. Nothing is mutated; each
/// branch builds fresh member lists.
pub fn combine<T: Coordinate>(rectangles: &[Rectangle<T>]) -> ComboCollection<T> {
    match rectangles {
        [] | [_] => single(rectangles.to_vec()),
        [first, second] => combine_pair(first, second),
        [first, rest @ ..] => {
            let mut combos = ComboCollection::new();

            for partial in &combine(rest) {
                for (index, partner) in partial.iter().enumerate() {
                    let remainder = partial.without(index);

                    for pairing in combine_pair(first, partner) {
                        let mut members = pairing.into_members();
                        members.extend(remainder.iter().cloned());
                        combos.insert(Combo::new(members));
                    }
                }
            }

            combos
        }
    }
}

/// Combos of exactly two rectangles
///
/// Equal rectangles are never merged; the pair is returned untouched.
pub fn combine_pair<T: Coordinate>(first: &Rectangle<T>, second: &Rectangle<T>) -> ComboCollection<T> {
    let mut combos = single(vec![first.clone(), second.clone()]);
    if let Some(merged) = merge(first, second) {
        combos.insert(Combo::new(vec![merged]));
    }
    combos
}

fn single<T: Coordinate>(members: Vec<Rectangle<T>>) -> ComboCollection<T> {
    let mut combos = ComboCollection::new();
    combos.insert(Combo::new(members));
    combos
}
