//! Reading tile records and writing chosen decompositions
//!
//! Input is pipe-separated query output: a header block, one record per
//! tile (`shape id | WKB hex | WKT`), and an optional `(N rows)` footer.
//! Geometry is read from the WKT column; the WKB column is not decoded.
//! Output is a fully quoted CSV with one row per rectangle of every chosen
//! combination.

use crate::algorithm::driver::{Decomposition, Shape};
use crate::io::configuration::{
    FOOTER_MARKER, HEADER_LINES, INPUT_DELIMITER, OUTPUT_HEADER, SHAPE_ID_COLUMN, WKT_COLUMN,
};
use crate::io::error::{ErrorContext, Result, TilingError, WithContext};
use crate::io::wkt::{GridCoordinate, parse_polygon};
use crate::spatial::rectangle::{Coordinate, Rectangle};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// One tile as read from the input
#[derive(Clone, Debug)]
pub struct TileRecord {
    /// Input line the record started on (1-based)
    pub line: usize,
    /// Trimmed shape identifier
    pub shape_id: String,
    /// Tile geometry parsed from the WKT column
    pub tile: Rectangle<GridCoordinate>,
}

/// Read tile records until the end of input or the footer line
///
/// # Errors
///
/// Returns an error if the input is not valid delimited text, a record has
/// too few columns, or a geometry cannot be parsed.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<TileRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(INPUT_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record
            .position()
            .map_or(0, |position| position.line() as usize);

        if line <= HEADER_LINES {
            continue;
        }
        if record.iter().any(|field| field.contains(FOOTER_MARKER)) {
            break;
        }

        let (Some(shape_id), Some(wkt)) = (record.get(SHAPE_ID_COLUMN), record.get(WKT_COLUMN))
        else {
            return Err(TilingError::InvalidSourceData {
                reason: format!(
                    "line {line}: expected at least {} fields, found {}",
                    WKT_COLUMN + 1,
                    record.len()
                ),
            });
        };

        let tile = parse_polygon(wkt).with_context(ErrorContext {
            line: Some(line),
            ..Default::default()
        })?;

        records.push(TileRecord {
            line,
            shape_id: shape_id.to_string(),
            tile,
        });
    }

    Ok(records)
}

/// Group consecutive records sharing a shape identifier into shapes
///
/// A shape identifier that reappears after a different one starts a new
/// shape, so input order is preserved exactly.
pub fn group_into_shapes(records: Vec<TileRecord>) -> Vec<Shape<GridCoordinate>> {
    let mut shapes: Vec<Shape<GridCoordinate>> = Vec::new();

    for record in records {
        match shapes.last_mut() {
            Some(shape) if shape.id == record.shape_id => shape.tiles.push(record.tile),
            _ => shapes.push(Shape::new(record.shape_id, vec![record.tile])),
        }
    }

    shapes
}

/// Read and group all shapes from a reader
///
/// # Errors
///
/// Returns an error if reading the records fails.
pub fn read_shapes<R: Read>(reader: R) -> Result<Vec<Shape<GridCoordinate>>> {
    let records = read_records(reader)?;
    check_shape_areas(&records)?;
    Ok(group_into_shapes(records))
}

/// Reject shapes whose total tile area does not fit the coordinate type
///
/// Every merged rectangle lies within its shape's tiles, so a bounded total
/// keeps all later area arithmetic in range.
fn check_shape_areas(records: &[TileRecord]) -> Result<()> {
    let mut current: Option<(&str, GridCoordinate)> = None;

    for record in records {
        let running = match current {
            Some((id, total)) if id == record.shape_id => total,
            _ => 0,
        };
        let total = running
            .checked_add(record.tile.area())
            .ok_or_else(|| TilingError::InvalidGeometry {
                line: record.line,
                text: record.tile.to_string(),
                reason: format!("total area of shape '{}' overflows", record.shape_id),
            })?;
        current = Some((record.shape_id.as_str(), total));
    }

    Ok(())
}

/// Read and group all shapes from a file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its records are invalid.
pub fn read_shapes_from_path(path: &Path) -> Result<Vec<Shape<GridCoordinate>>> {
    let file = File::open(path).with_path(path, "open")?;
    read_shapes(BufReader::new(file)).with_path(path, "read")
}

/// Write one row per rectangle of every combination, returning the row count
///
/// Combination identifiers restart at 0 for each shape.
///
/// # Errors
///
/// Returns an error if writing to the underlying writer fails.
pub fn write_decompositions<T: Coordinate, W: Write>(
    writer: W,
    decompositions: &[Decomposition<T>],
) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(OUTPUT_HEADER)?;

    let mut rows = 0;
    for decomposition in decompositions {
        for (combo_id, combo) in decomposition.combos.iter().enumerate() {
            let combo_id = combo_id.to_string();
            for rectangle in combo {
                let geometry = rectangle.to_string();
                csv_writer.write_record([
                    decomposition.shape_id.as_str(),
                    combo_id.as_str(),
                    geometry.as_str(),
                ])?;
                rows += 1;
            }
        }
    }

    csv_writer.flush()?;
    Ok(rows)
}

/// Write decompositions to a file, replacing any existing content
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_decompositions_to_path<T: Coordinate>(
    path: &Path,
    decompositions: &[Decomposition<T>],
) -> Result<usize> {
    let file = File::create(path).with_path(path, "create")?;
    write_decompositions(BufWriter::new(file), decompositions).with_path(path, "write")
}
