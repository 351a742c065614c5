//! Decomposition of contiguous unit-tile clusters into merged rectangles
//!
//! A shape is a cluster of edge-connected axis-aligned tiles. The engine
//! enumerates the ways edge-adjacent tiles can be merged into larger
//! rectangles, iterates to a fixed point, and returns either every grouping
//! with the fewest rectangles or, for a smaller requested count, the
//! contiguous subsets of those groupings covering the most area.

#![forbid(unsafe_code)]

/// Combination enumeration, fixed-point driver, and bounded selection
pub mod algorithm;
/// Record files, command line, logging, progress, and error handling
pub mod io;
/// Rectangles, adjacency, and contiguity
pub mod spatial;

pub use algorithm::combo::{Combo, ComboCollection};
pub use algorithm::driver::{Shape, TargetCardinality, decompose, process};
pub use io::error::{Result, TilingError};
pub use spatial::rectangle::Rectangle;
