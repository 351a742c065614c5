//! Rectangle geometry for tile clusters
//!
//! This module contains the geometric leaves of the decomposition:
//! - Rectangles with exact area and boundary-set equality
//! - Full-edge adjacency and lossless pairwise merging
//! - Edge-connectivity of rectangle sets

/// Shared-edge detection and merging of rectangle pairs
pub mod adjacency;
/// Flood-fill connectivity over the shared-segment relation
pub mod contiguity;
/// Axis-aligned rectangle value type
pub mod rectangle;

pub use rectangle::{Coordinate, Point, Rectangle};
