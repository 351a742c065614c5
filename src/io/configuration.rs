//! Record format constants and runtime configuration defaults

// Input record layout (psql-style unaligned query output)
/// Field separator of tile records
pub const INPUT_DELIMITER: u8 = b'|';
/// Leading lines skipped before the first record (column names and rule)
pub const HEADER_LINES: usize = 2;
/// A record containing this text ends the input, as in a `(12 rows)` footer
pub const FOOTER_MARKER: &str = "rows";
/// Column holding the shape identifier
pub const SHAPE_ID_COLUMN: usize = 0;
/// Column holding the WKT geometry
pub const WKT_COLUMN: usize = 2;
/// File extensions picked up when the target is a directory
pub const INPUT_EXTENSIONS: [&str; 2] = ["csv", "txt"];

// Output settings
/// Header row of the decomposition output
pub const OUTPUT_HEADER: [&str; 3] = ["shapeId", "comboId", "st_astext"];
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_tiled";
/// Extension of derived output files
pub const OUTPUT_EXTENSION: &str = "csv";

// Enumeration grows exponentially with cluster size
/// Largest shape (in tiles) decomposed by default
pub const DEFAULT_MAX_CLUSTER_SIZE: usize = 24;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
