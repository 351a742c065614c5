//! Edge-connectivity of rectangle sets
//!
//! Two rectangles are neighbours when their boundaries meet in a line segment
//! (see [`touches_along_segment`]). A set is contiguous when the neighbour
//! relation connects all of its members.

use crate::algorithm::bitset::MemberSet;
use crate::spatial::adjacency::touches_along_segment;
use crate::spatial::rectangle::{Coordinate, Rectangle};
use ndarray::Array2;

/// Symmetric neighbour matrix for a rectangle list
///
/// Entry `[i, j]` is `true` when rectangles `i` and `j` share part of an edge.
/// The diagonal is always `false`.
pub fn adjacency_matrix<T: Coordinate>(rectangles: &[Rectangle<T>]) -> Array2<bool> {
    let count = rectangles.len();
    let mut matrix = Array2::from_elem((count, count), false);

    for (i, first) in rectangles.iter().enumerate() {
        for (j, second) in rectangles.iter().enumerate().skip(i + 1) {
            if touches_along_segment(first, second) {
                if let Some(cell) = matrix.get_mut([i, j]) {
                    *cell = true;
                }
                if let Some(cell) = matrix.get_mut([j, i]) {
                    *cell = true;
                }
            }
        }
    }

    matrix
}

/// Flood-fill from `seed`, returning every position reachable through neighbours
fn absorb_from(adjacency: &Array2<bool>, seed: usize, absorbed: &mut MemberSet) -> Vec<usize> {
    let mut component = Vec::new();
    if !absorbed.insert(seed) {
        return component;
    }

    let mut frontier = vec![seed];
    while let Some(current) = frontier.pop() {
        component.push(current);
        for (neighbour, &touching) in adjacency.row(current).indexed_iter() {
            if touching && absorbed.insert(neighbour) {
                frontier.push(neighbour);
            }
        }
    }

    component.sort_unstable();
    component
}

/// Test whether a rectangle set forms a single edge-connected cluster
///
/// Empty and single-element sets are contiguous. The input is never modified.
pub fn is_contiguous<T: Coordinate>(rectangles: &[Rectangle<T>]) -> bool {
    if rectangles.len() <= 1 {
        return true;
    }

    let adjacency = adjacency_matrix(rectangles);
    let mut absorbed = MemberSet::new(rectangles.len());
    absorb_from(&adjacency, 0, &mut absorbed);
    absorbed.is_full()
}

/// Partition a rectangle set into edge-connected pieces
///
/// Each piece lists positions into `rectangles` in ascending order; pieces are
/// ordered by their smallest position.
pub fn connected_components<T: Coordinate>(rectangles: &[Rectangle<T>]) -> Vec<Vec<usize>> {
    let adjacency = adjacency_matrix(rectangles);
    let mut absorbed = MemberSet::new(rectangles.len());
    let mut components = Vec::new();

    loop {
        let next_seed = absorbed.absent().next();
        let Some(seed) = next_seed else {
            break;
        };
        components.push(absorb_from(&adjacency, seed, &mut absorbed));
    }

    components
}
