//! Axis-aligned rectangles compared by their boundary point sets
//!
//! Areas are computed in the coordinate type itself, so integer coordinates
//! give exact area sums and exact area comparisons everywhere in the crate.

use num_traits::Num;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Numeric type usable as a rectangle coordinate
pub trait Coordinate: Num + Copy + Ord + Hash + fmt::Debug + fmt::Display {}

impl<T> Coordinate for T where T: Num + Copy + Ord + Hash + fmt::Debug + fmt::Display {}

/// A boundary point as `[x, y]`
pub type Point<T> = [T; 2];

/// Immutable axis-aligned rectangle
///
/// The boundary ring is kept in the order it was supplied (closed, first point
/// repeated last). Two rectangles are equal when their sets of distinct
/// boundary points match, independent of ring orientation or start point.
/// Cloning is cheap: ring and point set are shared.
#[derive(Clone, Debug)]
pub struct Rectangle<T: Coordinate> {
    ring: Arc<[Point<T>]>,
    points: Arc<[Point<T>]>,
    min: Point<T>,
    max: Point<T>,
}

impl<T: Coordinate> Rectangle<T> {
    /// Create a rectangle spanning two opposite corners
    ///
    /// Corners are normalised, so any pair of opposite corners gives the same
    /// rectangle. The ring starts at the minimum corner and runs
    /// `(min x, min y) -> (min x, max y) -> (max x, max y) -> (max x, min y)`.
    pub fn new(a: Point<T>, b: Point<T>) -> Self {
        let [ax, ay] = a;
        let [bx, by] = b;
        let min = [ax.min(bx), ay.min(by)];
        let max = [ax.max(bx), ay.max(by)];
        let ring = vec![
            min,
            [min[0], max[1]],
            max,
            [max[0], min[1]],
            min,
        ];
        Self::from_parts(ring, min, max)
    }

    /// Create a rectangle from a boundary ring, closing the ring if needed
    ///
    /// The ring is not validated beyond being non-empty; callers are expected
    /// to supply axis-aligned rectangles.
    pub fn from_ring(mut ring: Vec<Point<T>>) -> Option<Self> {
        let (&first, rest) = ring.split_first()?;
        let (min, max) = rest.iter().fold((first, first), |(lo, hi), &[x, y]| {
            ([lo[0].min(x), lo[1].min(y)], [hi[0].max(x), hi[1].max(y)])
        });

        if ring.last() != Some(&first) || ring.len() == 1 {
            ring.push(first);
        }

        Some(Self::from_parts(ring, min, max))
    }

    fn from_parts(ring: Vec<Point<T>>, min: Point<T>, max: Point<T>) -> Self {
        let mut points = ring.clone();
        points.sort_unstable();
        points.dedup();

        Self {
            ring: ring.into(),
            points: points.into(),
            min,
            max,
        }
    }

    /// Closed boundary ring in supplied order
    pub fn ring(&self) -> &[Point<T>] {
        &self.ring
    }

    /// Distinct boundary points in sorted order
    pub fn boundary_points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Lower-left corner
    pub const fn min(&self) -> Point<T> {
        self.min
    }

    /// Upper-right corner
    pub const fn max(&self) -> Point<T> {
        self.max
    }

    /// Extent along the x axis
    pub fn width(&self) -> T {
        self.max[0] - self.min[0]
    }

    /// Extent along the y axis
    pub fn height(&self) -> T {
        self.max[1] - self.min[1]
    }

    /// Exact area in the coordinate type
    pub fn area(&self) -> T {
        self.width() * self.height()
    }

    /// Smallest rectangle covering both rectangles
    ///
    /// For two rectangles sharing a full edge this is exactly their union.
    #[must_use]
    pub fn bounding_union(&self, other: &Self) -> Self {
        Self::new(
            [self.min[0].min(other.min[0]), self.min[1].min(other.min[1])],
            [self.max[0].max(other.max[0]), self.max[1].max(other.max[1])],
        )
    }
}

impl<T: Coordinate> PartialEq for Rectangle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl<T: Coordinate> Eq for Rectangle<T> {}

impl<T: Coordinate> Hash for Rectangle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.points.hash(state);
    }
}

/// Writes the rectangle as a WKT polygon, e.g. `POLYGON ((0 0, 0 1, 1 1, 1 0, 0 0))`
impl<T: Coordinate> fmt::Display for Rectangle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("POLYGON ((")?;
        for (index, [x, y]) in self.ring.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x} {y}")?;
        }
        f.write_str("))")
    }
}
