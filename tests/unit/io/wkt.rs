//! Tests for WKT polygon parsing and coordinate validation

#[cfg(test)]
mod tests {
    use rectile::io::error::TilingError;
    use rectile::io::wkt::{parse_coordinate, parse_polygon};
    use rectile::spatial::rectangle::Rectangle;

    // Tests a unit tile parses with its ring order intact
    // Verified by rebuilding the ring from corners
    #[test]
    fn test_parse_unit_tile() {
        let tile = parse_polygon("POLYGON ((7 3, 7 4, 8 4, 8 3, 7 3))");
        assert!(tile.is_ok());
        if let Ok(tile) = tile {
            assert_eq!(tile, Rectangle::new([7, 3], [8, 4]));
            assert_eq!(tile.ring(), &[[7, 3], [7, 4], [8, 4], [8, 3], [7, 3]]);
            assert_eq!(tile.area(), 1);
        }
    }

    // Tests tag case and spacing are tolerated
    // Verified by requiring an upper-case tag
    #[test]
    fn test_parse_tolerates_case_and_spacing() {
        let tile = parse_polygon("  polygon((0 0,0 2,3 2,3 0,0 0))  ");
        assert_eq!(tile.ok(), Some(Rectangle::new([0, 0], [3, 2])));
    }

    // Tests counter-clockwise rings are kept as supplied
    // Verified by normalising the ring in parse_polygon
    #[test]
    fn test_parse_keeps_orientation() {
        let tile = parse_polygon("POLYGON ((0 0, 1 0, 1 1, 0 1, 0 0))");
        assert!(tile.is_ok());
        if let Ok(tile) = tile {
            assert_eq!(tile.ring().get(1), Some(&[1, 0]));
            assert_eq!(tile, Rectangle::new([0, 0], [1, 1]));
        }
    }

    // Tests integral coordinates with a zero fraction
    // Verified by rounding fractional coordinates
    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("7"), Some(7));
        assert_eq!(parse_coordinate("-3"), Some(-3));
        assert_eq!(parse_coordinate("7.0"), Some(7));
        assert_eq!(parse_coordinate("7.000"), Some(7));
        assert_eq!(parse_coordinate("7."), Some(7));
        assert_eq!(parse_coordinate("7.5"), None);
        assert_eq!(parse_coordinate(".0"), None);
        assert_eq!(parse_coordinate("-.0"), None);
        assert_eq!(parse_coordinate("x"), None);
    }

    // Tests fractional coordinates reject the geometry
    // Verified by truncating coordinates
    #[test]
    fn test_fractional_polygon_rejected() {
        let tile = parse_polygon("POLYGON ((0 0, 0 1.5, 1 1.5, 1 0, 0 0))");
        assert!(matches!(tile, Err(TilingError::InvalidGeometry { .. })));
    }

    // Tests malformed and unsupported geometries are rejected
    // Verified by accepting any parenthesised text
    #[test]
    fn test_invalid_geometries() {
        let rejected = [
            "POINT (1 1)",
            "POLYGON EMPTY",
            "POLYGON (0 0, 0 1, 1 1, 1 0, 0 0)",
            "POLYGON ((0 0, 0 3, 3 3, 3 0, 0 0), (1 1, 1 2, 2 2, 2 1, 1 1))",
            "POLYGON ((0 0, 0 1 5, 1 1, 1 0, 0 0))",
            "POLYGON ((0 0, 0 1, 1 0, 0 0))",
            "POLYGON ((0 0, 0 0, 0 0, 0 0))",
            "POLYGON ((0 0, 0 2, 1 2, 1 1, 2 1, 2 0, 0 0))",
            "",
        ];

        for text in rejected {
            assert!(
                matches!(parse_polygon(text), Err(TilingError::InvalidGeometry { .. })),
                "accepted {text:?}"
            );
        }
    }

    // Tests rings whose area exceeds the coordinate type are rejected
    // Verified by computing the area with unchecked arithmetic
    #[test]
    fn test_overflowing_area_rejected() {
        let huge = [
            "POLYGON ((0 0, 0 5000000000, 5000000000 5000000000, 5000000000 0, 0 0))",
            "POLYGON ((-5000000000000000000 0, -5000000000000000000 1, 5000000000000000000 1, 5000000000000000000 0, -5000000000000000000 0))",
        ];

        for text in huge {
            match parse_polygon(text) {
                Err(TilingError::InvalidGeometry { reason, .. }) => {
                    assert!(reason.contains("area overflows"), "{reason}");
                }
                other => unreachable!("Expected InvalidGeometry, got {other:?}"),
            }
        }
    }

    // Tests an area close to the coordinate limit is still accepted
    // Verified by rejecting areas near the coordinate limit
    #[test]
    fn test_large_area_accepted() {
        let tile = parse_polygon(
            "POLYGON ((0 0, 0 3000000000, 3000000000 3000000000, 3000000000 0, 0 0))",
        );
        assert_eq!(tile.map(|tile| tile.area()).ok(), Some(9_000_000_000_000_000_000));
    }

    // Tests the error message carries the offending text
    // Verified by omitting the text from the error
    #[test]
    fn test_error_mentions_text() {
        let error = parse_polygon("POLYGON ((0 0, 0 1, 1 0, 0 0))");
        assert!(error.is_err());
        if let Err(error) = error {
            let message = error.to_string();
            assert!(message.contains("POLYGON ((0 0, 0 1, 1 0, 0 0))"));
            assert!(message.contains("not an axis-aligned rectangle"));
        }
    }
}
