//! WKT polygon parsing for grid tiles
//!
//! Only single-ring `POLYGON` geometries describing axis-aligned rectangles
//! are accepted. Coordinates must be integral; `7` and `7.0` are both read as
//! `7`, while `7.5` is rejected rather than rounded.

use crate::io::error::{Result, invalid_geometry};
use crate::spatial::rectangle::{Point, Rectangle};

/// Coordinate type used by the file adapter
pub type GridCoordinate = i64;

const POLYGON_TAG: &str = "POLYGON";

/// Parse a WKT `POLYGON` into a rectangle, keeping its ring order
///
/// # Errors
///
/// Returns an error if the text is not a single-ring polygon, a coordinate is
/// not integral, or the ring does not describe an axis-aligned rectangle with
/// positive area.
pub fn parse_polygon(text: &str) -> Result<Rectangle<GridCoordinate>> {
    let trimmed = text.trim();
    let body = trimmed
        .get(..POLYGON_TAG.len())
        .filter(|tag| tag.eq_ignore_ascii_case(POLYGON_TAG))
        .and_then(|_| trimmed.get(POLYGON_TAG.len()..))
        .map(str::trim)
        .ok_or_else(|| invalid_geometry(text, &"expected a POLYGON"))?;

    let rings = body
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .map(str::trim)
        .ok_or_else(|| invalid_geometry(text, &"expected a parenthesised ring list"))?;

    let ring_text = rings
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .ok_or_else(|| invalid_geometry(text, &"expected a parenthesised ring"))?;

    if ring_text.contains('(') || ring_text.contains(')') {
        return Err(invalid_geometry(text, &"polygons with holes are not tiles"));
    }

    let ring = ring_text
        .split(',')
        .map(|point| {
            parse_point(point)
                .ok_or_else(|| invalid_geometry(text, &format!("bad point '{}'", point.trim())))
        })
        .collect::<Result<Vec<_>>>()?;

    let rectangle =
        Rectangle::from_ring(ring).ok_or_else(|| invalid_geometry(text, &"empty ring"))?;
    validate_rectangle(&rectangle).map_err(|reason| invalid_geometry(text, &reason))?;
    Ok(rectangle)
}

fn parse_point(text: &str) -> Option<Point<GridCoordinate>> {
    let mut tokens = text.split_whitespace();
    let x = parse_coordinate(tokens.next()?)?;
    let y = parse_coordinate(tokens.next()?)?;
    tokens.next().is_none().then_some([x, y])
}

/// Parse an integral coordinate, tolerating an all-zero fractional part
pub fn parse_coordinate(token: &str) -> Option<GridCoordinate> {
    match token.split_once('.') {
        None => token.parse().ok(),
        Some((whole, fraction)) => {
            let integral = !whole.is_empty() && whole != "-" && whole != "+";
            let zero_fraction = fraction.bytes().all(|digit| digit == b'0');
            if integral && zero_fraction {
                whole.parse().ok()
            } else {
                None
            }
        }
    }
}

fn validate_rectangle(
    rectangle: &Rectangle<GridCoordinate>,
) -> std::result::Result<(), &'static str> {
    let [min_x, min_y] = rectangle.min();
    let [max_x, max_y] = rectangle.max();
    let area = max_x
        .checked_sub(min_x)
        .zip(max_y.checked_sub(min_y))
        .and_then(|(width, height)| width.checked_mul(height))
        .ok_or("area overflows the coordinate type")?;
    if area <= 0 {
        return Err("ring has no area");
    }

    let on_boundary = rectangle
        .ring()
        .iter()
        .all(|&[x, y]| x == min_x || x == max_x || y == min_y || y == max_y);
    let corners = [[min_x, min_y], [min_x, max_y], [max_x, max_y], [max_x, min_y]];
    let has_corners = corners
        .iter()
        .all(|corner| rectangle.boundary_points().contains(corner));

    if on_boundary && has_corners {
        Ok(())
    } else {
        Err("ring is not an axis-aligned rectangle")
    }
}
