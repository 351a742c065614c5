//! Input/output adapters around the decomposition engine

/// Command-line parsing and batch file processing
pub mod cli;
/// Record format constants and runtime defaults
pub mod configuration;
/// Error types and context propagation
pub mod error;
/// Progress bars for files and shapes
pub mod progress;
/// Tile record reading and decomposition writing
pub mod records;
/// WKT polygon parsing
pub mod wkt;
