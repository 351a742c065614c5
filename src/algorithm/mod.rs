//! Combination enumeration and selection engine

/// Fixed-capacity index sets for flood fills and member matching
pub mod bitset;
/// Recursive pairwise merge enumeration
pub mod combiner;
/// Combinations and deduplicated combination collections
pub mod combo;
/// Fixed-point iteration over merge rounds and the decomposition entry points
pub mod driver;
/// Maximal-area contiguous subset selection
pub mod selection;
