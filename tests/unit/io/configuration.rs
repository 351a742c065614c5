//! Tests for record format constants and configuration defaults

#[cfg(test)]
mod tests {
    use rectile::io::configuration::{
        DEFAULT_MAX_CLUSTER_SIZE, FOOTER_MARKER, HEADER_LINES, INPUT_DELIMITER, INPUT_EXTENSIONS,
        MAX_INDIVIDUAL_PROGRESS_BARS, OUTPUT_EXTENSION, OUTPUT_HEADER, OUTPUT_SUFFIX,
        PROGRESS_BAR_WIDTH, SHAPE_ID_COLUMN, WKT_COLUMN,
    };

    // Tests the input record layout
    // Verified by changing the delimiter to a comma
    #[test]
    fn test_input_layout() {
        assert_eq!(INPUT_DELIMITER, b'|');
        assert_eq!(HEADER_LINES, 2);
        assert_eq!(FOOTER_MARKER, "rows");
        assert_eq!((SHAPE_ID_COLUMN, WKT_COLUMN), (0, 2));
        assert!(INPUT_EXTENSIONS.contains(&"txt"));
    }

    // Tests output header matches the downstream column names
    // Verified by renaming the geometry column
    #[test]
    fn test_output_header() {
        assert_eq!(OUTPUT_HEADER, ["shapeId", "comboId", "st_astext"]);
        assert_eq!(OUTPUT_SUFFIX, "_tiled");
        assert_eq!(OUTPUT_EXTENSION, "csv");
    }

    // Tests the default cluster limit
    // Verified by changing the limit
    #[test]
    fn test_default_cluster_limit() {
        assert_eq!(DEFAULT_MAX_CLUSTER_SIZE, 24);
    }

    // Tests progress display settings
    // Verified by changing bar width
    #[test]
    fn test_progress_settings() {
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
        assert_eq!(PROGRESS_BAR_WIDTH, 30);
    }
}
