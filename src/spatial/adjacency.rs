//! Edge sharing and lossless merging of rectangle pairs

use crate::spatial::rectangle::{Coordinate, Point, Rectangle};

/// Directed boundary segment between two consecutive ring points
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment<T> {
    /// Segment start point
    pub start: Point<T>,
    /// Segment end point
    pub end: Point<T>,
}

impl<T: Copy> Segment<T> {
    /// Same segment traversed in the opposite direction
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

/// Boundary edges of a rectangle in ring order, skipping zero-length edges
pub fn edges<T: Coordinate>(rectangle: &Rectangle<T>) -> impl Iterator<Item = Segment<T>> + '_ {
    rectangle.ring().windows(2).filter_map(|window| match *window {
        [start, end] if start != end => Some(Segment { start, end }),
        _ => None,
    })
}

/// First edge of `second` that coincides with an edge of `first`
///
/// Edges are compared in both traversal directions, so ring orientation does
/// not matter.
pub fn shared_edge<T: Coordinate>(first: &Rectangle<T>, second: &Rectangle<T>) -> Option<Segment<T>> {
    let first_edges: Vec<Segment<T>> = edges(first).collect();
    edges(second).find(|edge| first_edges.contains(edge) || first_edges.contains(&edge.reversed()))
}

/// Merge two distinct rectangles that share a full edge
///
/// Returns the bounding rectangle of the pair, which is their exact union
/// because both inputs are axis-aligned and share a complete edge. Returns
/// `None` for equal rectangles or rectangles without a common edge.
pub fn merge<T: Coordinate>(first: &Rectangle<T>, second: &Rectangle<T>) -> Option<Rectangle<T>> {
    if first == second {
        return None;
    }
    shared_edge(first, second).map(|_| first.bounding_union(second))
}

/// Test whether the boundaries of two rectangles meet in a line segment
///
/// Touching at a single corner or not touching at all does not count, nor do
/// overlapping interiors. Partial edge contact does count.
pub fn touches_along_segment<T: Coordinate>(first: &Rectangle<T>, second: &Rectangle<T>) -> bool {
    let [first_min_x, first_min_y] = first.min();
    let [first_max_x, first_max_y] = first.max();
    let [second_min_x, second_min_y] = second.min();
    let [second_max_x, second_max_y] = second.max();

    let low_x = first_min_x.max(second_min_x);
    let high_x = first_max_x.min(second_max_x);
    let low_y = first_min_y.max(second_min_y);
    let high_y = first_max_y.min(second_max_y);

    if high_x < low_x || high_y < low_y {
        return false;
    }

    // Exactly one degenerate axis means the intersection is a segment
    (high_x == low_x) != (high_y == low_y)
}
