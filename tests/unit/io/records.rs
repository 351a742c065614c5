//! Tests for reading tile records and writing decompositions

#[cfg(test)]
mod tests {
    use rectile::algorithm::combo::{Combo, ComboCollection};
    use rectile::algorithm::driver::Decomposition;
    use rectile::io::error::TilingError;
    use rectile::io::records::{
        group_into_shapes, read_records, read_shapes, read_shapes_from_path,
        write_decompositions, write_decompositions_to_path,
    };
    use rectile::spatial::rectangle::Rectangle;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
 shape_id |    wkb    |                 wkt
----------+-----------+--------------------------------------
 s1       | 01030000A | POLYGON ((0 0, 0 1, 1 1, 1 0, 0 0))
 s1       | 01030000B | POLYGON ((1 0, 1 1, 2 1, 2 0, 1 0))
 s2       | 01030000C | POLYGON ((5 5, 5 6, 6 6, 6 5, 5 5))
(3 rows)

";

    fn cell(x: i64, y: i64) -> Rectangle<i64> {
        Rectangle::new([x, y], [x + 1, y + 1])
    }

    // Tests header lines and the footer are skipped
    // Verified by reading records from the first line
    #[test]
    fn test_read_records() {
        let records = read_records(SAMPLE.as_bytes());
        assert!(records.is_ok());
        if let Ok(records) = records {
            assert_eq!(records.len(), 3);
            let lines: Vec<usize> = records.iter().map(|record| record.line).collect();
            assert_eq!(lines, vec![3, 4, 5]);

            let first = records.first();
            assert_eq!(first.map(|record| record.shape_id.as_str()), Some("s1"));
            assert_eq!(first.map(|record| record.tile.clone()), Some(cell(0, 0)));
        }
    }

    // Tests records after the footer are ignored
    // Verified by continuing past the footer line
    #[test]
    fn test_footer_ends_input() {
        let input = format!("{SAMPLE} s3 | x | not a polygon\n");
        let records = read_records(input.as_bytes());
        assert_eq!(records.map(|records| records.len()).ok(), Some(3));
    }

    // Tests consecutive records are grouped into shapes in input order
    // Verified by grouping by identifier across the whole input
    #[test]
    fn test_read_shapes() {
        let shapes = read_shapes(SAMPLE.as_bytes());
        assert!(shapes.is_ok());
        if let Ok(shapes) = shapes {
            let ids: Vec<&str> = shapes.iter().map(|shape| shape.id.as_str()).collect();
            assert_eq!(ids, vec!["s1", "s2"]);
            assert_eq!(
                shapes.first().map(|shape| shape.tiles.clone()),
                Some(vec![cell(0, 0), cell(1, 0)])
            );
        }
    }

    // Tests a reappearing identifier starts a new shape
    // Verified by appending to any earlier shape with the same identifier
    #[test]
    fn test_reappearing_identifier() {
        let input = "\
id | wkb | wkt
---+-----+----
a | 0 | POLYGON ((0 0, 0 1, 1 1, 1 0, 0 0))
b | 0 | POLYGON ((3 0, 3 1, 4 1, 4 0, 3 0))
a | 0 | POLYGON ((1 0, 1 1, 2 1, 2 0, 1 0))
";
        let records = read_records(input.as_bytes());
        assert!(records.is_ok());
        if let Ok(records) = records {
            let shapes = group_into_shapes(records);
            let ids: Vec<&str> = shapes.iter().map(|shape| shape.id.as_str()).collect();
            assert_eq!(ids, vec!["a", "b", "a"]);
        }
    }

    // Tests a record without a geometry column is rejected
    // Verified by defaulting missing columns to empty text
    #[test]
    fn test_missing_columns() {
        let input = "id | wkb | wkt\n---\ns1 | 0103\n";
        match read_records(input.as_bytes()) {
            Err(TilingError::InvalidSourceData { reason }) => {
                assert!(reason.contains("line 3"));
                assert!(reason.contains("found 2"));
            }
            other => unreachable!("Expected InvalidSourceData, got {other:?}"),
        }
    }

    // Tests invalid geometry errors carry the record line
    // Verified by dropping the line context
    #[test]
    fn test_invalid_geometry_line() {
        let input = "id | wkb | wkt\n---\ns1 | 0 | POLYGON ((0 0, 0 1, 1 1, 1 0, 0 0))\ns1 | 0 | POLYGON ((0 0, 0 1.5, 1 1.5, 1 0, 0 0))\n";
        match read_records(input.as_bytes()) {
            Err(TilingError::InvalidGeometry { line, .. }) => assert_eq!(line, 4),
            other => unreachable!("Expected InvalidGeometry, got {other:?}"),
        }
    }

    // Tests a tile too wide for the coordinate type fails with its line
    // Verified by computing tile area with unchecked arithmetic
    #[test]
    fn test_overflowing_tile_rejected() {
        let input = "id | wkb | wkt\n---\ns1 | 0 | POLYGON ((0 0, 0 1, 1 1, 1 0, 0 0))\ns1 | 0 | POLYGON ((-5000000000000000000 0, -5000000000000000000 1, 5000000000000000000 1, 5000000000000000000 0, -5000000000000000000 0))\n";
        match read_shapes(input.as_bytes()) {
            Err(TilingError::InvalidGeometry { line, reason, .. }) => {
                assert_eq!(line, 4);
                assert!(reason.contains("area overflows"), "{reason}");
            }
            other => unreachable!("Expected InvalidGeometry, got {other:?}"),
        }
    }

    // Tests a shape whose summed tile area overflows is rejected
    // Verified by summing shape areas without overflow checks
    #[test]
    fn test_overflowing_shape_area_rejected() {
        let input = "id | wkb | wkt\n---\ns1 | 0 | POLYGON ((0 0, 0 3000000000, 2000000000 3000000000, 2000000000 0, 0 0))\ns1 | 0 | POLYGON ((2000000000 0, 2000000000 3000000000, 4000000000 3000000000, 4000000000 0, 2000000000 0))\n";
        match read_shapes(input.as_bytes()) {
            Err(TilingError::InvalidGeometry { line, reason, .. }) => {
                assert_eq!(line, 4);
                assert!(reason.contains("'s1'"), "{reason}");
            }
            other => unreachable!("Expected InvalidGeometry, got {other:?}"),
        }
    }

    // Tests large tiles in different shapes are accepted
    // Verified by summing areas across all shapes
    #[test]
    fn test_large_tiles_in_separate_shapes() {
        let input = "id | wkb | wkt\n---\ns1 | 0 | POLYGON ((0 0, 0 3000000000, 2000000000 3000000000, 2000000000 0, 0 0))\ns2 | 0 | POLYGON ((2000000000 0, 2000000000 3000000000, 4000000000 3000000000, 4000000000 0, 2000000000 0))\n";
        let shapes = read_shapes(input.as_bytes());
        assert_eq!(shapes.map(|shapes| shapes.len()).ok(), Some(2));
    }

    // Tests one fully quoted row per rectangle with per-shape combo ids
    // Verified by numbering combos across shapes
    #[test]
    fn test_write_decompositions() {
        let first: ComboCollection<i64> = [
            Combo::new(vec![Rectangle::new([0, 0], [2, 1])]),
            Combo::new(vec![cell(0, 0), cell(1, 0)]),
        ]
        .into_iter()
        .collect();
        let second: ComboCollection<i64> =
            std::iter::once(Combo::new(vec![cell(5, 5)])).collect();
        let decompositions = vec![
            Decomposition {
                shape_id: "s1".to_string(),
                minimal_cardinality: 1,
                rounds: 1,
                selected_area: None,
                combos: first,
            },
            Decomposition {
                shape_id: "s2".to_string(),
                minimal_cardinality: 1,
                rounds: 1,
                selected_area: None,
                combos: second,
            },
        ];

        let mut buffer = Vec::new();
        let rows = write_decompositions(&mut buffer, &decompositions);
        assert_eq!(rows.ok(), Some(4));

        let expected = "\
\"shapeId\",\"comboId\",\"st_astext\"
\"s1\",\"0\",\"POLYGON ((0 0, 0 1, 2 1, 2 0, 0 0))\"
\"s1\",\"1\",\"POLYGON ((0 0, 0 1, 1 1, 1 0, 0 0))\"
\"s1\",\"1\",\"POLYGON ((1 0, 1 1, 2 1, 2 0, 1 0))\"
\"s2\",\"0\",\"POLYGON ((5 5, 5 6, 6 6, 6 5, 5 5))\"
";
        assert_eq!(String::from_utf8_lossy(&buffer), expected);
    }

    // Tests file round trip through paths
    // Verified by writing without the header row
    #[test]
    fn test_path_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("shapes.txt");
        let output = temp_dir.path().join("shapes_tiled.csv");
        fs::write(&input, SAMPLE).unwrap();

        let shapes = read_shapes_from_path(&input).unwrap();
        assert_eq!(shapes.len(), 2);

        let rows = write_decompositions_to_path::<i64>(&output, &[]).unwrap();
        assert_eq!(rows, 0);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "\"shapeId\",\"comboId\",\"st_astext\"\n"
        );
    }

    // Tests a missing input file reports its path
    // Verified by leaving the placeholder path in place
    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.txt");

        match read_shapes_from_path(&missing) {
            Err(TilingError::FileSystem {
                path, operation, ..
            }) => {
                assert_eq!(path, missing);
                assert_eq!(operation, "open");
            }
            other => unreachable!("Expected FileSystem error, got {other:?}"),
        }
    }
}
